//! Key generators shared by tests and benchmarks.

/// Keys of the form `"a" * k ++ "b"` for `k` in `0..count`.
///
/// Inserted together they build a trie whose depth grows linearly with
/// the key count, which is what the deep-tree tests need.
pub fn generate_keys_skewed(count: usize) -> impl Iterator<Item = Vec<u8>> {
    (0..count).map(|k| {
        let mut key = vec![b'a'; k];
        key.push(b'b');
        key
    })
}

/// Every string of length `len` over `alphabet`, in lexicographic order.
pub fn generate_key_fixed_length(len: usize, alphabet: &[u8]) -> Vec<Vec<u8>> {
    let mut keys: Vec<Vec<u8>> = vec![Vec::new()];
    for _ in 0..len {
        keys = keys
            .into_iter()
            .flat_map(|key| {
                alphabet.iter().map(move |unit| {
                    let mut extended = key.clone();
                    extended.push(*unit);
                    extended
                })
            })
            .collect();
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skewed_keys_share_ever_longer_prefixes() {
        let keys: Vec<Vec<u8>> = generate_keys_skewed(4).collect();
        assert_eq!(
            keys,
            [b"b".to_vec(), b"ab".to_vec(), b"aab".to_vec(), b"aaab".to_vec()]
        );
    }

    #[test]
    fn fixed_length_keys_enumerate_the_whole_product() {
        let keys = generate_key_fixed_length(2, b"xy");
        assert_eq!(
            keys,
            [b"xx".to_vec(), b"xy".to_vec(), b"yx".to_vec(), b"yy".to_vec()]
        );
    }
}
