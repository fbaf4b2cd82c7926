/// Element types a rendered buffer can carry.
///
/// The names follow the torch dtype system:
/// [PyTorch Tensor dtypes](https://pytorch.org/docs/stable/tensors.html).
/// Values always reach the renderer widened to `f64`; the dtype only decides
/// how many buffer slots make up one logical element and what the verbose
/// header reports.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::TensorError;

/// Enum representing the supported data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point (torch.float32 or torch.float)
    Float32,
    /// 64-bit floating point (torch.float64 or torch.double)
    Float64,
    /// 16-bit floating point (torch.float16 or torch.half)
    Float16,
    /// 16-bit Brain Floating Point (torch.bfloat16)
    BFloat16,
    /// 8-bit Brain Floating Point (torch.bfloat8)
    BFloat8,
    /// 32-bit complex (torch.complex32 or torch.chalf)
    Complex32,
    /// 64-bit complex (torch.complex64 or torch.cfloat)
    Complex64,
    /// 128-bit complex (torch.complex128 or torch.cdouble)
    Complex128,
    /// 8-bit unsigned integer (torch.uint8)
    UInt8,
    /// 16-bit unsigned integer (torch.uint16)
    UInt16,
    /// 32-bit unsigned integer (torch.uint32)
    UInt32,
    /// 64-bit unsigned integer (torch.uint64)
    UInt64,
    /// 8-bit signed integer (torch.int8)
    Int8,
    /// 16-bit signed integer (torch.int16 or torch.short)
    Int16,
    /// 32-bit signed integer (torch.int32 or torch.int)
    Int32,
    /// 64-bit signed integer (torch.int64 or torch.long)
    Int64,
    /// Boolean (torch.bool)
    Bool,
}

impl DType {
    pub const ALL: [DType; 17] = [
        DType::Float32,
        DType::Float64,
        DType::Float16,
        DType::BFloat16,
        DType::BFloat8,
        DType::Complex32,
        DType::Complex64,
        DType::Complex128,
        DType::UInt8,
        DType::UInt16,
        DType::UInt32,
        DType::UInt64,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::Bool,
    ];

    /// Returns the size in bytes of each dtype.
    pub fn byte_size(&self) -> usize {
        match self {
            DType::Float32 => 4,
            DType::Float64 => 8,
            DType::Float16 => 2,
            DType::BFloat16 => 2,
            DType::BFloat8 => 1,
            DType::Complex32 => 4,   // Two Float16 values
            DType::Complex64 => 8,   // Two Float32 values
            DType::Complex128 => 16, // Two Float64 values
            DType::UInt8 => 1,
            DType::UInt16 => 2,
            DType::UInt32 => 4,
            DType::UInt64 => 8,
            DType::Int8 => 1,
            DType::Int16 => 2,
            DType::Int32 => 4,
            DType::Int64 => 8,
            DType::Bool => 1,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, DType::Complex32 | DType::Complex64 | DType::Complex128)
    }

    /// Number of buffer slots one logical element occupies.
    ///
    /// Complex elements are stored as interleaved `(re, im)` pairs, so every
    /// offset into the buffer advances twice as fast for them.
    pub fn values_per_element(&self) -> usize {
        if self.is_complex() {
            2
        } else {
            1
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Float16 => "float16",
            DType::BFloat16 => "bfloat16",
            DType::BFloat8 => "bfloat8",
            DType::Complex32 => "complex32",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Bool => "bool",
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_prefix("torch.").unwrap_or(&name);

        // Aliases first, then the canonical names.
        let dtype = match name {
            "float" => Some(DType::Float32),
            "double" => Some(DType::Float64),
            "half" => Some(DType::Float16),
            "chalf" => Some(DType::Complex32),
            "cfloat" => Some(DType::Complex64),
            "cdouble" => Some(DType::Complex128),
            "short" => Some(DType::Int16),
            "int" => Some(DType::Int32),
            "long" => Some(DType::Int64),
            other => DType::ALL.iter().copied().find(|d| d.name() == other),
        };

        dtype.ok_or_else(|| TensorError::UnknownDType {
            name: s.to_string(),
        })
    }
}
