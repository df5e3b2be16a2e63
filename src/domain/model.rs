use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A recursive signal value: either a bare integer or an ordered list of
/// nested packets. Serializes untagged, so the JSON form of a packet is
/// exactly its literal text form (`[1,[2,3]]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Packet {
    Integer(i64),
    List(Vec<Packet>),
}

// Ordering rules, checked in order:
//   integer vs integer  -> numeric
//   integer vs list     -> promote the integer to a one-element list
//   list vs list        -> element-wise, equal prefix falls back to length
fn compare_items(a: &[Packet], b: &[Packet]) -> Ordering {
    for (left, right) in a.iter().zip(b) {
        match left.cmp(right) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Integer(a), Packet::Integer(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => compare_items(a, b),
            (Packet::Integer(_), Packet::List(b)) => {
                compare_items(std::slice::from_ref(self), b)
            }
            (Packet::List(a), Packet::Integer(_)) => {
                compare_items(a, std::slice::from_ref(other))
            }
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality must agree with the comparator: `1` and `[1]` compare Equal, so
// a derived structural PartialEq would break the Ord contract.
impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Integer(n) => write!(f, "{}", n),
            Packet::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Two consecutive packets from the input, 1-based position included.
#[derive(Debug, Clone)]
pub struct PacketPair {
    pub index: usize,
    pub left: Packet,
    pub right: Packet,
}

impl PacketPair {
    pub fn in_order(&self) -> bool {
        self.left < self.right
    }
}

/// The serializable outcome of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReport {
    pub generated_at: DateTime<Utc>,
    pub packet_count: usize,
    pub pair_count: usize,
    pub ordered_pair_indices: Vec<usize>,
    pub ordered_pair_index_sum: usize,
    pub dividers: Vec<String>,
    pub divider_ranks: Vec<usize>,
    pub divider_rank_product: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub packets: Vec<Packet>,
    pub pairs: Vec<PacketPair>,
    pub report: SignalReport,
}
