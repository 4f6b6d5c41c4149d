use crate::Counter;

use super::{Direction, StatKind};

/// Canonical names of the 26 counters, in field-layout order.
pub const ICMPV4_STATS_FIELD_NAMES: [&str; 26] = [
    "InMsgs",
    "InErrors",
    "InDestUnreachs",
    "InTimeExcds",
    "InParmProbs",
    "InSrcQuenchs",
    "InRedirects",
    "InEchos",
    "InEchoReps",
    "InTimestamps",
    "InTimestampReps",
    "InAddrMasks",
    "InAddrMaskReps",
    "OutMsgs",
    "OutErrors",
    "OutDestUnreachs",
    "OutTimeExcds",
    "OutParmProbs",
    "OutSrcQuenchs",
    "OutRedirects",
    "OutEchos",
    "OutEchoReps",
    "OutTimestamps",
    "OutTimestampReps",
    "OutAddrMasks",
    "OutAddrMaskReps",
];

/// ICMPv4 protocol statistics: 26 wrapping event counters, paired as
/// inbound/outbound variants of the 13 [`StatKind`] categories.
///
/// All fields are public and independent. No relationship between fields is
/// enforced; in particular, nothing requires `in_msgs` to cover the sum of
/// the per-type inbound counters.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Icmpv4Stats {
    /// Inbound messages of any type.
    pub in_msgs: Counter,
    /// Inbound messages counted as errors.
    pub in_errors: Counter,
    /// Inbound destination unreachable messages.
    pub in_dest_unreachs: Counter,
    /// Inbound time exceeded messages.
    pub in_time_excds: Counter,
    /// Inbound parameter problem messages.
    pub in_parm_probs: Counter,
    /// Inbound source quench messages.
    pub in_src_quenchs: Counter,
    /// Inbound redirect messages.
    pub in_redirects: Counter,
    /// Inbound echo request messages.
    pub in_echos: Counter,
    /// Inbound echo reply messages.
    pub in_echo_reps: Counter,
    /// Inbound timestamp request messages.
    pub in_timestamps: Counter,
    /// Inbound timestamp reply messages.
    pub in_timestamp_reps: Counter,
    /// Inbound address mask request messages.
    pub in_addr_masks: Counter,
    /// Inbound address mask reply messages.
    pub in_addr_mask_reps: Counter,
    /// Outbound messages of any type.
    pub out_msgs: Counter,
    /// Outbound messages counted as errors.
    pub out_errors: Counter,
    /// Outbound destination unreachable messages.
    pub out_dest_unreachs: Counter,
    /// Outbound time exceeded messages.
    pub out_time_excds: Counter,
    /// Outbound parameter problem messages.
    pub out_parm_probs: Counter,
    /// Outbound source quench messages.
    pub out_src_quenchs: Counter,
    /// Outbound redirect messages.
    pub out_redirects: Counter,
    /// Outbound echo request messages.
    pub out_echos: Counter,
    /// Outbound echo reply messages.
    pub out_echo_reps: Counter,
    /// Outbound timestamp request messages.
    pub out_timestamps: Counter,
    /// Outbound timestamp reply messages.
    pub out_timestamp_reps: Counter,
    /// Outbound address mask request messages.
    pub out_addr_masks: Counter,
    /// Outbound address mask reply messages.
    pub out_addr_mask_reps: Counter,
}

impl Icmpv4Stats {
    /// Number of counters in the record.
    pub const FIELD_COUNT: usize = 26;

    /// A record with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The counter of category `kind` in direction `dir`.
    pub fn counter(&self, dir: Direction, kind: StatKind) -> Counter {
        match dir {
            Direction::In => match kind {
                StatKind::Msgs => self.in_msgs,
                StatKind::Errors => self.in_errors,
                StatKind::DestUnreachs => self.in_dest_unreachs,
                StatKind::TimeExcds => self.in_time_excds,
                StatKind::ParmProbs => self.in_parm_probs,
                StatKind::SrcQuenchs => self.in_src_quenchs,
                StatKind::Redirects => self.in_redirects,
                StatKind::Echos => self.in_echos,
                StatKind::EchoReps => self.in_echo_reps,
                StatKind::Timestamps => self.in_timestamps,
                StatKind::TimestampReps => self.in_timestamp_reps,
                StatKind::AddrMasks => self.in_addr_masks,
                StatKind::AddrMaskReps => self.in_addr_mask_reps,
            },
            Direction::Out => match kind {
                StatKind::Msgs => self.out_msgs,
                StatKind::Errors => self.out_errors,
                StatKind::DestUnreachs => self.out_dest_unreachs,
                StatKind::TimeExcds => self.out_time_excds,
                StatKind::ParmProbs => self.out_parm_probs,
                StatKind::SrcQuenchs => self.out_src_quenchs,
                StatKind::Redirects => self.out_redirects,
                StatKind::Echos => self.out_echos,
                StatKind::EchoReps => self.out_echo_reps,
                StatKind::Timestamps => self.out_timestamps,
                StatKind::TimestampReps => self.out_timestamp_reps,
                StatKind::AddrMasks => self.out_addr_masks,
                StatKind::AddrMaskReps => self.out_addr_mask_reps,
            },
        }
    }

    /// Mutable access to the counter of category `kind` in direction `dir`.
    pub fn counter_mut(&mut self, dir: Direction, kind: StatKind) -> &mut Counter {
        match dir {
            Direction::In => match kind {
                StatKind::Msgs => &mut self.in_msgs,
                StatKind::Errors => &mut self.in_errors,
                StatKind::DestUnreachs => &mut self.in_dest_unreachs,
                StatKind::TimeExcds => &mut self.in_time_excds,
                StatKind::ParmProbs => &mut self.in_parm_probs,
                StatKind::SrcQuenchs => &mut self.in_src_quenchs,
                StatKind::Redirects => &mut self.in_redirects,
                StatKind::Echos => &mut self.in_echos,
                StatKind::EchoReps => &mut self.in_echo_reps,
                StatKind::Timestamps => &mut self.in_timestamps,
                StatKind::TimestampReps => &mut self.in_timestamp_reps,
                StatKind::AddrMasks => &mut self.in_addr_masks,
                StatKind::AddrMaskReps => &mut self.in_addr_mask_reps,
            },
            Direction::Out => match kind {
                StatKind::Msgs => &mut self.out_msgs,
                StatKind::Errors => &mut self.out_errors,
                StatKind::DestUnreachs => &mut self.out_dest_unreachs,
                StatKind::TimeExcds => &mut self.out_time_excds,
                StatKind::ParmProbs => &mut self.out_parm_probs,
                StatKind::SrcQuenchs => &mut self.out_src_quenchs,
                StatKind::Redirects => &mut self.out_redirects,
                StatKind::Echos => &mut self.out_echos,
                StatKind::EchoReps => &mut self.out_echo_reps,
                StatKind::Timestamps => &mut self.out_timestamps,
                StatKind::TimestampReps => &mut self.out_timestamp_reps,
                StatKind::AddrMasks => &mut self.out_addr_masks,
                StatKind::AddrMaskReps => &mut self.out_addr_mask_reps,
            },
        }
    }

    /// Iterate over all 26 counters in field-layout order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, StatKind, Counter)> + '_ {
        Direction::ALL.into_iter().flat_map(move |dir| {
            StatKind::ALL
                .into_iter()
                .map(move |kind| (dir, kind, self.counter(dir, kind)))
        })
    }

    /// Field-wise wrapping sum of two records.
    ///
    /// Used to merge copies of the record kept by different event sources,
    /// such as per-CPU instances.
    pub fn wrapping_add(&self, other: &Icmpv4Stats) -> Icmpv4Stats {
        let mut out = Icmpv4Stats::default();
        for dir in Direction::ALL {
            for kind in StatKind::ALL {
                *out.counter_mut(dir, kind) =
                    self.counter(dir, kind).wrapping_add(other.counter(dir, kind));
            }
        }
        out
    }

    /// Field-wise counter deltas against an `earlier` snapshot of this record.
    ///
    /// Each resulting counter holds the number of events recorded between
    /// the two snapshots, correct across at most one wrap per field.
    pub fn wrapping_delta(&self, earlier: &Icmpv4Stats) -> Icmpv4Stats {
        let mut out = Icmpv4Stats::default();
        for dir in Direction::ALL {
            for kind in StatKind::ALL {
                *out.counter_mut(dir, kind) = Counter::new(
                    self.counter(dir, kind).wrapping_delta(earlier.counter(dir, kind)),
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_table() {
        assert_eq!(ICMPV4_STATS_FIELD_NAMES.len(), Icmpv4Stats::FIELD_COUNT);
        let mut idx = 0;
        for dir in Direction::ALL {
            for kind in StatKind::ALL {
                assert_eq!(kind.name(dir), ICMPV4_STATS_FIELD_NAMES[idx]);
                idx += 1;
            }
        }
    }

    #[test]
    fn counter_access() {
        let mut stats = Icmpv4Stats::new();
        stats.counter_mut(Direction::In, StatKind::Echos).inc();
        stats.counter_mut(Direction::In, StatKind::Msgs).inc();
        stats.counter_mut(Direction::Out, StatKind::EchoReps).add(3);

        assert_eq!(stats.in_echos, Counter::new(1));
        assert_eq!(stats.in_msgs, Counter::new(1));
        assert_eq!(stats.out_echo_reps, Counter::new(3));
        assert_eq!(stats.counter(Direction::Out, StatKind::EchoReps), Counter::new(3));
        assert_eq!(stats.counter(Direction::Out, StatKind::Msgs), Counter::ZERO);
    }

    #[test]
    fn iter_order() {
        let mut stats = Icmpv4Stats::new();
        stats.in_msgs = Counter::new(1);
        stats.out_addr_mask_reps = Counter::new(26);

        let triples: [(Direction, StatKind, Counter); 26] = {
            let mut arr = [(Direction::In, StatKind::Msgs, Counter::ZERO); 26];
            for (slot, triple) in arr.iter_mut().zip(stats.iter()) {
                *slot = triple;
            }
            arr
        };
        assert_eq!(triples[0], (Direction::In, StatKind::Msgs, Counter::new(1)));
        assert_eq!(
            triples[25],
            (Direction::Out, StatKind::AddrMaskReps, Counter::new(26))
        );
    }

    #[test]
    fn merge_and_delta() {
        let mut a = Icmpv4Stats::new();
        a.in_msgs = Counter::new(10);
        a.out_errors = Counter::new(u64::MAX);

        let mut b = Icmpv4Stats::new();
        b.in_msgs = Counter::new(5);
        b.out_errors = Counter::new(2);

        let merged = a.wrapping_add(&b);
        assert_eq!(merged.in_msgs, Counter::new(15));
        assert_eq!(merged.out_errors, Counter::new(1));

        let delta = merged.wrapping_delta(&b);
        assert_eq!(delta.in_msgs, Counter::new(10));
        assert_eq!(delta.out_errors, Counter::new(u64::MAX));
        assert_eq!(delta.in_redirects, Counter::ZERO);
    }
}
