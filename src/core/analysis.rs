use crate::core::parser;
use crate::domain::model::{Packet, PacketPair};
use crate::utils::error::Result;

/// Divider literals used when the configuration does not override them.
pub const DEFAULT_DIVIDERS: [&str; 2] = ["[[2]]", "[[6]]"];

/// Sum of the 1-based positions of the pairs whose left packet sorts before
/// the right one.
pub fn ordered_pair_index_sum(pairs: &[PacketPair]) -> usize {
    pairs
        .iter()
        .filter(|pair| pair.in_order())
        .map(|pair| pair.index)
        .sum()
}

pub fn ordered_pair_indices(pairs: &[PacketPair]) -> Vec<usize> {
    pairs
        .iter()
        .filter(|pair| pair.in_order())
        .map(|pair| pair.index)
        .collect()
}

/// 1-based rank of each divider once the dividers are merged into the
/// collection and the whole collection is sorted.
pub fn divider_ranks(packets: &[Packet], dividers: &[Packet]) -> Vec<usize> {
    let mut merged: Vec<&Packet> = packets.iter().chain(dividers.iter()).collect();
    merged.sort();

    // With a total order, every strictly smaller element sits left of the
    // partition point.
    dividers
        .iter()
        .map(|divider| merged.partition_point(|packet| *packet < divider) + 1)
        .collect()
}

pub fn divider_rank_product(packets: &[Packet], dividers: &[Packet]) -> usize {
    divider_ranks(packets, dividers).iter().product()
}

/// Turns configured divider literals into packets, falling back to the
/// defaults when none are configured.
pub fn resolve_dividers(literals: &[String]) -> Result<Vec<Packet>> {
    if literals.is_empty() {
        return DEFAULT_DIVIDERS
            .iter()
            .map(|literal| parser::parse_packet(literal))
            .collect();
    }

    literals
        .iter()
        .map(|literal| parser::parse_packet(literal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_packet;
    use crate::domain::model::PacketPair;

    const SAMPLE: [(&str, &str); 8] = [
        ("[1,1,3,1,1]", "[1,1,5,1,1]"),
        ("[[1],[2,3,4]]", "[[1],4]"),
        ("[9]", "[[8,7,6]]"),
        ("[[4,4],4,4]", "[[4,4],4,4,4]"),
        ("[7,7,7,7]", "[7,7,7]"),
        ("[]", "[3]"),
        ("[[[]]]", "[[]]"),
        ("[1,[2,[3,[4,[5,6,7]]]],8,9]", "[1,[2,[3,[4,[5,6,0]]]],8,9]"),
    ];

    fn sample_pairs() -> Vec<PacketPair> {
        SAMPLE
            .iter()
            .enumerate()
            .map(|(i, (left, right))| PacketPair {
                index: i + 1,
                left: parse_packet(left).unwrap(),
                right: parse_packet(right).unwrap(),
            })
            .collect()
    }

    fn sample_packets() -> Vec<Packet> {
        SAMPLE
            .iter()
            .flat_map(|(left, right)| [left, right])
            .map(|line| parse_packet(line).unwrap())
            .collect()
    }

    #[test]
    fn sample_pairs_sum_to_thirteen() {
        let pairs = sample_pairs();
        assert_eq!(ordered_pair_indices(&pairs), vec![1, 2, 4, 6]);
        assert_eq!(ordered_pair_index_sum(&pairs), 13);
    }

    #[test]
    fn default_dividers_rank_tenth_and_fourteenth_in_the_sample() {
        let packets = sample_packets();
        let dividers = resolve_dividers(&[]).unwrap();
        assert_eq!(divider_ranks(&packets, &dividers), vec![10, 14]);
        assert_eq!(divider_rank_product(&packets, &dividers), 140);
    }

    #[test]
    fn custom_dividers_are_honored() {
        let packets = sample_packets();
        let literals = vec!["[[0]]".to_string()];
        let dividers = resolve_dividers(&literals).unwrap();
        assert_eq!(dividers.len(), 1);
        // only [], [[]] and [[[]]] sort before [[0]]
        assert_eq!(divider_ranks(&packets, &dividers), vec![4]);
    }

    #[test]
    fn malformed_divider_literals_are_parse_errors() {
        let literals = vec!["[[2]".to_string()];
        assert!(resolve_dividers(&literals).is_err());
    }

    #[test]
    fn empty_collection_ranks_dividers_in_their_own_order() {
        let dividers = resolve_dividers(&[]).unwrap();
        assert_eq!(divider_ranks(&[], &dividers), vec![1, 2]);
        assert_eq!(divider_rank_product(&[], &dividers), 2);
    }
}
