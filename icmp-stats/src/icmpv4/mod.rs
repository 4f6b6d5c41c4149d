//! ICMPv4 protocol statistics.
//!
//! The counter set pairs inbound and outbound variants of 13 message
//! categories: the two direction totals (messages, errors) plus one counter
//! per accounted ICMP message type.

enum_sim! {
    /// An enum-like type for representing ICMPv4 message types.
    pub struct IcmpType (u8) {
        /// Echo reply message.
        ECHO_REPLY = 0,
        /// Destination unreachable message.
        DST_UNREACHABLE = 3,
        /// Source quench message (deprecated).
        SOURCE_QUENCH = 4,
        /// Redirect message.
        REDIRECT_MESSAGE = 5,
        /// Echo request message.
        ECHO_REQUEST = 8,
        /// Router advertisement message.
        ROUTER_ADVERTISEMENT = 9,
        /// Router solicitation message.
        ROUTER_SOLICITATION = 10,
        /// Time exceeded message.
        TIME_EXCEEDED = 11,
        /// Parameter problem message.
        PARAMETER_PROBLEM = 12,
        /// Timestamp request message.
        TIMESTAMP = 13,
        /// Timestamp reply message.
        TIMESTAMP_REPLY = 14,
        /// Address mask request message.
        ADDRESS_MASK_REQUEST = 17,
        /// Address mask reply message.
        ADDRESS_MASK_REPLY = 18,
    }
}

/// Direction of message flow relative to the local network stack.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Direction {
    /// Messages delivered to the local stack.
    In,
    /// Messages emitted by the local stack.
    Out,
}

impl Direction {
    /// Both directions, in field-layout order.
    pub const ALL: [Direction; 2] = [Direction::In, Direction::Out];
}

/// The 13 ICMPv4 counter categories kept per direction.
///
/// The discriminant of each category is its ordinal inside a direction
/// block of the statistics record.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum StatKind {
    /// Messages of any type.
    Msgs = 0,
    /// Messages counted as errors.
    Errors = 1,
    /// Destination unreachable messages.
    DestUnreachs = 2,
    /// Time exceeded messages.
    TimeExcds = 3,
    /// Parameter problem messages.
    ParmProbs = 4,
    /// Source quench messages.
    SrcQuenchs = 5,
    /// Redirect messages.
    Redirects = 6,
    /// Echo request messages.
    Echos = 7,
    /// Echo reply messages.
    EchoReps = 8,
    /// Timestamp request messages.
    Timestamps = 9,
    /// Timestamp reply messages.
    TimestampReps = 10,
    /// Address mask request messages.
    AddrMasks = 11,
    /// Address mask reply messages.
    AddrMaskReps = 12,
}

impl StatKind {
    /// All categories, in field-layout order.
    pub const ALL: [StatKind; 13] = [
        StatKind::Msgs,
        StatKind::Errors,
        StatKind::DestUnreachs,
        StatKind::TimeExcds,
        StatKind::ParmProbs,
        StatKind::SrcQuenchs,
        StatKind::Redirects,
        StatKind::Echos,
        StatKind::EchoReps,
        StatKind::Timestamps,
        StatKind::TimestampReps,
        StatKind::AddrMasks,
        StatKind::AddrMaskReps,
    ];

    /// Ordinal of the category inside a direction block.
    #[inline]
    pub const fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Canonical field name of the category in the given direction.
    #[inline]
    pub fn name(&self, dir: Direction) -> &'static str {
        match dir {
            Direction::In => ICMPV4_STATS_FIELD_NAMES[self.ordinal()],
            Direction::Out => ICMPV4_STATS_FIELD_NAMES[13 + self.ordinal()],
        }
    }

    /// The per-type category accounting messages of type `ty`.
    ///
    /// `None` for types without a dedicated counter. The direction totals
    /// `Msgs` and `Errors` are never returned, as they are not tied to a
    /// message type.
    pub fn from_icmp_type(ty: IcmpType) -> Option<StatKind> {
        match ty {
            IcmpType::DST_UNREACHABLE => Some(StatKind::DestUnreachs),
            IcmpType::TIME_EXCEEDED => Some(StatKind::TimeExcds),
            IcmpType::PARAMETER_PROBLEM => Some(StatKind::ParmProbs),
            IcmpType::SOURCE_QUENCH => Some(StatKind::SrcQuenchs),
            IcmpType::REDIRECT_MESSAGE => Some(StatKind::Redirects),
            IcmpType::ECHO_REQUEST => Some(StatKind::Echos),
            IcmpType::ECHO_REPLY => Some(StatKind::EchoReps),
            IcmpType::TIMESTAMP => Some(StatKind::Timestamps),
            IcmpType::TIMESTAMP_REPLY => Some(StatKind::TimestampReps),
            IcmpType::ADDRESS_MASK_REQUEST => Some(StatKind::AddrMasks),
            IcmpType::ADDRESS_MASK_REPLY => Some(StatKind::AddrMaskReps),
            _ => None,
        }
    }
}

mod stats;
pub use stats::{Icmpv4Stats, ICMPV4_STATS_FIELD_NAMES};

mod record;
pub use record::{Icmpv4StatsRecord, ICMPV4_STATS_RECORD_LEN, ICMPV4_STATS_RECORD_TEMPLATE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_kind_ordinals() {
        for (idx, kind) in StatKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), idx);
        }
    }

    #[test]
    fn stat_kind_names() {
        assert_eq!(StatKind::Msgs.name(Direction::In), "InMsgs");
        assert_eq!(StatKind::Msgs.name(Direction::Out), "OutMsgs");
        assert_eq!(StatKind::AddrMaskReps.name(Direction::In), "InAddrMaskReps");
        assert_eq!(
            StatKind::AddrMaskReps.name(Direction::Out),
            "OutAddrMaskReps"
        );
    }

    #[test]
    fn stat_kind_from_icmp_type() {
        assert_eq!(
            StatKind::from_icmp_type(IcmpType::ECHO_REQUEST),
            Some(StatKind::Echos)
        );
        assert_eq!(
            StatKind::from_icmp_type(IcmpType::ECHO_REPLY),
            Some(StatKind::EchoReps)
        );
        assert_eq!(
            StatKind::from_icmp_type(IcmpType::ADDRESS_MASK_REPLY),
            Some(StatKind::AddrMaskReps)
        );
        // Router discovery messages have no dedicated counter.
        assert_eq!(StatKind::from_icmp_type(IcmpType::ROUTER_ADVERTISEMENT), None);
        assert_eq!(StatKind::from_icmp_type(IcmpType::from(255)), None);
    }
}
