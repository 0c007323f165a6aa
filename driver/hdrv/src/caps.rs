//! 驱动能力集
//!
//! 驱动通过 [`DriverOps::capabilities`](crate::DriverOps::capabilities) 声明自己实现了哪些操作，
//! 分发层只看这里的位，不关心驱动的具体类型。

bitflags::bitflags! {
    /// 每个可选驱动操作一位
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DriverCaps: u32 {
        const INIT = 1 << 0;
        const DEINIT = 1 << 1;
        const SET_IEEE8021X = 1 << 2;
        const SET_PRIVACY = 1 << 3;
        const GET_SEQNUM = 1 << 4;
        const FLUSH = 1 << 5;
        const SET_GENERIC_ELEM = 1 << 6;
        const GET_SSID = 1 << 7;
        const SET_SSID = 1 << 8;
        const SET_COUNTERMEASURES = 1 << 9;
        const STA_ADD = 1 << 10;
        const SET_FREQ = 1 << 11;
        const SET_RTS = 1 << 12;
        const SET_FRAG = 1 << 13;
        const STA_SET_FLAGS = 1 << 14;
        const SET_RATE_SETS = 1 << 15;
        const SET_COUNTRY = 1 << 16;
        const SET_CTS_PROTECT = 1 << 17;
        const SET_PREAMBLE = 1 << 18;
        const SET_SHORT_SLOT_TIME = 1 << 19;
        const SET_TX_QUEUE_PARAMS = 1 << 20;
        const VALID_BSS_MASK = 1 << 21;
        const IF_ADD = 1 << 22;
        const IF_REMOVE = 1 << 23;
        const GET_HW_FEATURE_DATA = 1 << 24;
        const COMMIT = 1 << 25;
        const SET_HT_PARAMS = 1 << 26;
        const SCAN = 1 << 27;
        const GET_SCAN_RESULTS = 1 << 28;
    }
}
