//! Shader and configuration parameter values.

use crate::error::Result;
use std::ffi::{CStr, CString};

/// Type tag of a [`Parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ParameterType(pub u32);

impl ParameterType {
    /// Unset.
    pub const NONE: Self = Self(0);
    /// 32-bit float.
    pub const FLOAT: Self = Self(1);
    /// 32-bit signed integer.
    pub const INT: Self = Self(2);
    /// 32-bit unsigned integer, shown as hex in the editor.
    pub const HEX: Self = Self(3);
    /// Win32 `BOOL` (4 bytes).
    pub const BOOL: Self = Self(4);
    /// Three floats, RGB.
    pub const COLOR3: Self = Self(5);
    /// Four floats, RGBA.
    pub const COLOR4: Self = Self(6);
    /// Three floats, XYZ.
    pub const VECTOR3: Self = Self(7);
}

/// A parameter value exchanged with the host (`ENBParameter`).
///
/// The host interprets `data` according to `kind`; only the first `size` bytes
/// are meaningful.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parameter {
    /// Raw value bytes, native endian.
    pub data: [u8; 16],
    /// Number of meaningful bytes in `data`.
    pub size: u32,
    /// How `data` is interpreted.
    pub kind: ParameterType,
}

impl Parameter {
    fn from_words(kind: ParameterType, words: &[[u8; 4]]) -> Self {
        let mut data = [0u8; 16];
        for (chunk, word) in data.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(word);
        }
        Self {
            data,
            size: (words.len() * 4) as u32,
            kind,
        }
    }

    fn word(&self, index: usize) -> [u8; 4] {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.data[index * 4..index * 4 + 4]);
        word
    }

    fn floats<const N: usize>(&self) -> [f32; N] {
        std::array::from_fn(|i| f32::from_ne_bytes(self.word(i)))
    }

    /// A float parameter.
    pub fn float(value: f32) -> Self {
        Self::from_words(ParameterType::FLOAT, &[value.to_ne_bytes()])
    }

    /// An integer parameter.
    pub fn int(value: i32) -> Self {
        Self::from_words(ParameterType::INT, &[value.to_ne_bytes()])
    }

    /// A hex parameter.
    pub fn hex(value: u32) -> Self {
        Self::from_words(ParameterType::HEX, &[value.to_ne_bytes()])
    }

    /// A boolean parameter.
    pub fn boolean(value: bool) -> Self {
        Self::from_words(ParameterType::BOOL, &[i32::from(value).to_ne_bytes()])
    }

    /// An RGB color parameter.
    pub fn color3(rgb: [f32; 3]) -> Self {
        Self::from_words(ParameterType::COLOR3, &rgb.map(f32::to_ne_bytes))
    }

    /// An RGBA color parameter.
    pub fn color4(rgba: [f32; 4]) -> Self {
        Self::from_words(ParameterType::COLOR4, &rgba.map(f32::to_ne_bytes))
    }

    /// A 3-component vector parameter.
    pub fn vector3(xyz: [f32; 3]) -> Self {
        Self::from_words(ParameterType::VECTOR3, &xyz.map(f32::to_ne_bytes))
    }

    /// The meaningful bytes of the value.
    pub fn bytes(&self) -> &[u8] {
        &self.data[..(self.size as usize).min(self.data.len())]
    }

    /// The value as a float, if it is one.
    pub fn as_float(&self) -> Option<f32> {
        (self.kind == ParameterType::FLOAT).then(|| f32::from_ne_bytes(self.word(0)))
    }

    /// The value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i32> {
        (self.kind == ParameterType::INT).then(|| i32::from_ne_bytes(self.word(0)))
    }

    /// The value as a hex word, if it is one.
    pub fn as_hex(&self) -> Option<u32> {
        (self.kind == ParameterType::HEX).then(|| u32::from_ne_bytes(self.word(0)))
    }

    /// The value as a boolean, if it is one. Any nonzero `BOOL` is true.
    pub fn as_bool(&self) -> Option<bool> {
        (self.kind == ParameterType::BOOL).then(|| i32::from_ne_bytes(self.word(0)) != 0)
    }

    /// The value as an RGB color, if it is one.
    pub fn as_color3(&self) -> Option<[f32; 3]> {
        (self.kind == ParameterType::COLOR3).then(|| self.floats())
    }

    /// The value as an RGBA color, if it is one.
    pub fn as_color4(&self) -> Option<[f32; 4]> {
        (self.kind == ParameterType::COLOR4).then(|| self.floats())
    }

    /// The value as a vector, if it is one.
    pub fn as_vector3(&self) -> Option<[f32; 3]> {
        (self.kind == ParameterType::VECTOR3).then(|| self.floats())
    }
}

/// Owned address of a parameter: optional file, category and key.
///
/// Without a file the path addresses live shader variables instead of a saved
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterPath {
    file: Option<CString>,
    category: CString,
    key: CString,
}

impl ParameterPath {
    /// Address a live shader variable.
    pub fn shader(category: &str, key: &str) -> Result<Self> {
        Ok(Self {
            file: None,
            category: CString::new(category)?,
            key: CString::new(key)?,
        })
    }

    /// Address a value in a configuration file such as `enbseries.ini`.
    pub fn config(file: &str, category: &str, key: &str) -> Result<Self> {
        Ok(Self {
            file: Some(CString::new(file)?),
            ..Self::shader(category, key)?
        })
    }

    /// File qualifier, `None` for shader variables.
    pub fn file(&self) -> Option<&CStr> {
        self.file.as_deref()
    }

    /// Category (section) name.
    pub fn category(&self) -> &CStr {
        &self.category
    }

    /// Key name.
    pub fn key(&self) -> &CStr {
        &self.key
    }
}
