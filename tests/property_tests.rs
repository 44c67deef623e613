use huffpack::format::{header_len, write_header, COUNT_BYTES, PAIR_BYTES};
use huffpack::{
    compress, decompress, CodeTable, Error, FrequencyTable, HuffmanDecoder, HuffmanEncoder,
    HuffmanTree,
};
use proptest::prelude::*;

/// Skewed byte buffers drawn from a small alphabet, so ties and deep trees both show up.
fn skewed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 1..512),
        prop::collection::vec(0u8..4, 1..512),
        prop::collection::vec(prop::sample::select(vec![b'a', b'a', b'a', b'b', b'c']), 1..256),
    ]
}

proptest! {
    #[test]
    fn test_roundtrip(input in skewed_bytes()) {
        let packed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_frequency_sum_is_length(input in prop::collection::vec(any::<u8>(), 0..1024)) {
        let table = FrequencyTable::from_bytes(&input);
        prop_assert_eq!(table.total(), input.len() as u64);
        prop_assert_eq!(table.iter().map(|(_, c)| c).sum::<u64>(), input.len() as u64);
    }

    #[test]
    fn test_leaves_match_distinct_symbols(input in skewed_bytes()) {
        let table = FrequencyTable::from_bytes(&input);
        let tree = HuffmanTree::build(&table);
        let mut symbols = tree.symbols();
        prop_assert_eq!(symbols.len(), table.len());
        prop_assert_eq!(tree.leaf_count(), table.len());
        symbols.sort_unstable();
        symbols.dedup();
        prop_assert_eq!(symbols.len(), table.len());
    }

    #[test]
    fn test_frequent_symbols_never_get_longer_codes(input in skewed_bytes()) {
        let table = FrequencyTable::from_bytes(&input);
        let codes = CodeTable::from_tree(&HuffmanTree::build(&table));
        for (a, fa) in table.iter() {
            for (b, fb) in table.iter() {
                if fa > fb {
                    let la = codes.get(a).unwrap().len();
                    let lb = codes.get(b).unwrap().len();
                    prop_assert!(la <= lb, "{a:#04x}({fa}) -> {la} bits, {b:#04x}({fb}) -> {lb} bits");
                }
            }
        }
    }

    #[test]
    fn test_header_order_does_not_change_tree(input in skewed_bytes(), seed in any::<u64>()) {
        let table = FrequencyTable::from_bytes(&input);
        let mut header = Vec::new();
        write_header(&table, &mut header);

        // Rotate the pair block; the reader must rebuild the same table and tree.
        let pairs = &mut header[COUNT_BYTES..];
        let n = pairs.len() / PAIR_BYTES;
        pairs.rotate_left((seed as usize % n) * PAIR_BYTES);

        let packed = [header, HuffmanEncoder::new(&table).encode(&input).unwrap()].concat();
        prop_assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_truncated_payload_is_an_error(input in prop::collection::vec(0u8..8, 16..256)) {
        let table = FrequencyTable::from_bytes(&input);
        prop_assume!(table.len() > 1);
        let packed = compress(&input).unwrap();
        let header = header_len(table.len());
        prop_assume!(packed.len() > header);

        let err = decompress(&packed[..packed.len() - 1]).unwrap_err();
        let is_truncated = matches!(err, Error::TruncatedPayload { .. });
        prop_assert!(is_truncated);
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decompress(&data);
    }
}

#[test]
fn test_single_symbol_aaaa() {
    let table = FrequencyTable::from_bytes(b"aaaa");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(b'a'), 4);

    let packed = compress(b"aaaa").unwrap();
    assert_eq!(packed.len(), header_len(1));
    assert_eq!(decompress(&packed).unwrap(), b"aaaa");

    let decoder = HuffmanDecoder::new(&table);
    assert_eq!(decoder.total(), 4);
    assert!(decoder.tree().root().unwrap().is_leaf());
}

#[test]
fn test_empty_input() {
    let packed = compress(&[]).unwrap();
    assert_eq!(packed, 0u64.to_le_bytes());
    assert_eq!(decompress(&packed).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_padding_is_ignored() {
    // 'b' -> 0, so zero padding would decode as extra 'b's if it were read.
    let input = b"aaab";
    let packed = compress(input).unwrap();
    let payload = &packed[header_len(2)..];
    assert_eq!(payload, &[0b1110_0000]);
    assert_eq!(decompress(&packed).unwrap(), input);

    // Non-zero padding decodes just the same.
    let mut noisy = packed.clone();
    *noisy.last_mut().unwrap() |= 0b0001_1111;
    assert_eq!(decompress(&noisy).unwrap(), input);
}

#[test]
fn test_all_byte_values() {
    let input: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let packed = compress(&input).unwrap();
    // Uniform distribution over 256 symbols: every code is 8 bits.
    assert_eq!(packed.len(), header_len(256) + input.len());
    assert_eq!(decompress(&packed).unwrap(), input);
}
