//! Bulk hashing and encoding over many records.
//!
//! Every hash call is independent, so records are processed with rayon's
//! parallel iterators. Output order matches input order.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::encode::{Alphabet, encode};
use crate::murmur32::hash32;
use crate::murmur128::{Hash128, hash128};

/// 32-bit hash of every record.
pub fn hash32_many<T>(records: &[T], seed: u32) -> Vec<u32>
where
    T: AsRef<[u8]> + Sync,
{
    records.par_iter().map(|r| hash32(r, seed)).collect()
}

/// 128-bit hash of every record.
pub fn hash128_many<T>(records: &[T]) -> Vec<Hash128>
where
    T: AsRef<[u8]> + Sync,
{
    records.par_iter().map(hash128).collect()
}

/// Encode every value.
pub fn encode_many(values: &[u64], alphabet: &Alphabet) -> Vec<String> {
    values.par_iter().map(|&v| encode(v, alphabet)).collect()
}

/// Codes that occur more than once, with the indices where they occur.
///
/// Indices are ascending; the result is sorted by code.
pub fn find_collisions(codes: &[String]) -> Vec<(String, Vec<usize>)> {
    let mut seen: HashMap<&str, Vec<usize>> = HashMap::with_capacity(codes.len());
    for (i, code) in codes.iter().enumerate() {
        seen.entry(code.as_str()).or_default().push(i);
    }

    let mut collisions: Vec<(String, Vec<usize>)> = seen
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .map(|(code, indices)| (code.to_string(), indices))
        .collect();
    collisions.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    collisions
}
