//! Fixed-schema row and its packed on-page layout.
//!
//! A serialized row is the three columns laid end to end with no padding:
//!
//! ```text
//! 0        4                        36                                 291
//! +--------+------------------------+----------------------------------+
//! | id u32 | username [u8; 32]      | email [u8; 255]                  |
//! +--------+------------------------+----------------------------------+
//! ```
//!
//! Text columns are zero padded. A value that fills its column exactly has no
//! terminator byte.

use std::borrow::Cow;
use std::fmt;

use crate::error::RowError;

pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;
pub const ID_SIZE: usize = size_of::<u32>();
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

#[derive(Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: [u8; USERNAME_SIZE],
    pub email: [u8; EMAIL_SIZE],
}

impl Row {
    /// Builds a row, rejecting text wider than its column or containing NUL.
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self, RowError> {
        if username.contains('\0') || email.contains('\0') {
            return Err(RowError::ContainsNul);
        }
        let username = to_fixed(username).ok_or(RowError::UsernameTooLong)?;
        let email = to_fixed(email).ok_or(RowError::EmailTooLong)?;
        Ok(Self {
            id,
            username,
            email,
        })
    }

    pub fn username(&self) -> Cow<'_, str> {
        from_fixed(&self.username)
    }

    pub fn email(&self) -> Cow<'_, str> {
        from_fixed(&self.email)
    }

    /// Writes the row into `dst` at the fixed column offsets.
    ///
    /// `dst` must be at least [`ROW_SIZE`] bytes long.
    pub fn serialize(&self, dst: &mut [u8]) {
        debug_assert!(dst.len() >= ROW_SIZE);
        dst[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        dst[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE].copy_from_slice(&self.username);
        dst[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE].copy_from_slice(&self.email);
    }

    /// Reads a row back from the fixed column offsets of `src`.
    ///
    /// `src` must be at least [`ROW_SIZE`] bytes long.
    pub fn deserialize(src: &[u8]) -> Self {
        debug_assert!(src.len() >= ROW_SIZE);
        let mut id = [0u8; ID_SIZE];
        let mut username = [0u8; USERNAME_SIZE];
        let mut email = [0u8; EMAIL_SIZE];
        id.copy_from_slice(&src[ID_OFFSET..ID_OFFSET + ID_SIZE]);
        username.copy_from_slice(&src[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);
        email.copy_from_slice(&src[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);
        Self {
            id: u32::from_le_bytes(id),
            username,
            email,
        }
    }
}

fn to_fixed<const N: usize>(input: &str) -> Option<[u8; N]> {
    let bytes = input.as_bytes();
    if bytes.len() > N {
        return None;
    }
    let mut buffer = [0u8; N];
    buffer[..bytes.len()].copy_from_slice(bytes);
    Some(buffer)
}

fn from_fixed(column: &[u8]) -> Cow<'_, str> {
    let len = column.iter().position(|&b| b == 0).unwrap_or(column.len());
    String::from_utf8_lossy(&column[..len])
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username(), self.email())
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("username", &self.username())
            .field("email", &self.email())
            .finish()
    }
}
