//! MurmurHash3 (x86_32 and x64_128) paired with a compact short-code
//! encoder.
//!
//! ```
//! use murmurcode::{decode, encode, hash32, BASE62};
//!
//! let code = encode(u64::from(hash32(b"https://example.com", 0)), &BASE62);
//! assert_eq!(decode(&code, &BASE62), Ok(u64::from(hash32(b"https://example.com", 0))));
//! ```

#[cfg(feature = "parallel")]
pub mod bulk;
pub mod config;
pub mod encode;
pub mod error;
pub mod generate;
pub mod mix;
pub mod murmur128;
pub mod murmur32;
pub mod store;

pub use config::{CodeConfig, HashVariant};
pub use encode::{Alphabet, BASE36, BASE58, BASE62, decode, encode, encode_fixed, encode_signed};
pub use error::{ErrorKind, MurmurCodeError, Result};
pub use generate::CodeGenerator;
pub use murmur32::hash32;
pub use murmur128::{Hash128, hash128, hash128_bytes, hash128_range};
pub use store::{CodeStore, MemoryStore};

/// Base62 short code of the seed-0 32-bit hash of `input`.
pub fn short_code(input: impl AsRef<[u8]>) -> String {
    encode(u64::from(hash32(input, 0)), &BASE62)
}
