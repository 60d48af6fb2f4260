//! Image Offset Core - Offset and compositing library
//!
//! This crate shifts an image and/or mask by an integer offset, either
//! wrapping content around the canvas edges (for tiling) or clipping it onto
//! a canvas filled with a caller-chosen color, then flattens the result over
//! that color.
//!
//! The entry point is [`apply_offset`]. Inputs and outputs are normalized
//! float tensors ([`ImageTensor`], [`MaskTensor`]); all pixel work happens on
//! 8-bit `image` crate buffers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod color;
pub mod offset;
pub mod tensor;
pub mod transform;

pub use color::{parse_fill_color, ColorParseError, FillColor};
pub use offset::{
    apply_offset, format_info, OffsetError, OffsetOutput, NO_INPUT_INFO, PLACEHOLDER_SIZE,
};
pub use tensor::{ImageTensor, MaskTensor, TensorError};

/// Smallest offset a host is expected to pass.
pub const OFFSET_MIN: i32 = -4096;

/// Largest offset a host is expected to pass.
pub const OFFSET_MAX: i32 = 4096;

/// Error returned when a toggle string is not one of its allowed values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Unknown {name} value {value:?}, expected one of {expected}")]
    UnknownOption {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Edge behaviour of the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WrapMode {
    /// Content leaving the canvas is discarded; vacated areas get the fill color.
    #[default]
    Off,
    /// Content leaving one edge re-enters at the opposite edge.
    On,
}

impl WrapMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WrapMode::Off => "Off",
            WrapMode::On => "On",
        }
    }
}

impl From<bool> for WrapMode {
    fn from(value: bool) -> Self {
        if value {
            WrapMode::On
        } else {
            WrapMode::Off
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WrapMode {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Off" => Ok(WrapMode::Off),
            "On" => Ok(WrapMode::On),
            _ => Err(ParamError::UnknownOption {
                name: "wrap_around",
                value: s.to_string(),
                expected: "Off, On",
            }),
        }
    }
}

/// Whether the output mask is inverted before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaskInversion {
    #[default]
    No,
    Yes,
}

impl MaskInversion {
    pub fn is_yes(self) -> bool {
        self == MaskInversion::Yes
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MaskInversion::No => "No",
            MaskInversion::Yes => "Yes",
        }
    }
}

impl From<bool> for MaskInversion {
    fn from(value: bool) -> Self {
        if value {
            MaskInversion::Yes
        } else {
            MaskInversion::No
        }
    }
}

impl fmt::Display for MaskInversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskInversion {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "No" => Ok(MaskInversion::No),
            "Yes" => Ok(MaskInversion::Yes),
            _ => Err(ParamError::UnknownOption {
                name: "invert_mask_output",
                value: s.to_string(),
                expected: "No, Yes",
            }),
        }
    }
}

/// Parameters for a single offset operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetParams {
    /// Horizontal offset in pixels (positive = right)
    pub offset_x: i32,
    /// Vertical offset in pixels (positive = down)
    pub offset_y: i32,
    /// Wrap content around the edges instead of clipping it
    pub wrap_around: WrapMode,
    /// Fill/background color as hex (`rrggbb`, `rrggbbaa`) or decimal (`r,g,b[,a]`)
    pub fill_color: String,
    /// Invert the mask before it is returned
    pub invert_mask_output: MaskInversion,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            wrap_around: WrapMode::Off,
            fill_color: "0,0,0".to_string(),
            invert_mask_output: MaskInversion::No,
        }
    }
}

impl OffsetParams {
    /// Create parameters with the given offset and defaults for everything else.
    pub fn new(offset_x: i32, offset_y: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            ..Self::default()
        }
    }
}
