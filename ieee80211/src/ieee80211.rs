//! IEEE 802.11 类型与常量
//!
//! 地址、信息元素 ID、HT Capabilities 元素布局，以及 AP 侧站点标志位。

/// MAC 地址长度
pub const ETH_ALEN: usize = 6;

/// MAC 地址
pub type MacAddr = [u8; ETH_ALEN];

/// 广播地址
pub const BROADCAST_ADDR: MacAddr = [0xff; ETH_ALEN];

/// 全零地址（未配置）
#[inline]
pub fn is_zero_ether_addr(addr: &MacAddr) -> bool {
    addr.iter().all(|&b| b == 0)
}

/// 组播/广播地址（首字节 I/G 位）
#[inline]
pub fn is_multicast_ether_addr(addr: &MacAddr) -> bool {
    addr[0] & 0x01 != 0
}

/// 802.11 信息元素 ID（WLAN_EID_*）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WlanEid {
    Ssid = 0,
    SupportedRates = 1,
    DsParams = 3,
    Tim = 5,
    Country = 7,
    ErpInfo = 42,
    HtCapability = 45,
    Rsn = 48,
    ExtSuppRates = 50,
    HtOperation = 61,
    Vendor = 221,
}

impl WlanEid {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// HT Capabilities 元素体长度（不含 EID/len 两字节）
pub const HT_CAPABILITIES_LEN: usize = 26;

/// HT Operation 元素体长度
pub const HT_OPERATION_LEN: usize = 22;

/// HT Capabilities 元素体（IEEE 802.11n 7.3.2.56）
///
/// 站点关联时由核心解析出来，经 sta_add 原样交给驱动；多字节字段为主机序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtCapabilities {
    pub ht_capabilities_info: u16,
    pub a_mpdu_params: u8,
    pub supported_mcs_set: [u8; 16],
    pub ht_extended_capabilities: u16,
    pub tx_bf_capability_info: u32,
    pub asel_capabilities: u8,
}

impl HtCapabilities {
    /// 从元素体解析（little-endian）；长度不足返回 None
    pub fn from_bytes(body: &[u8]) -> Option<Self> {
        if body.len() < HT_CAPABILITIES_LEN {
            return None;
        }
        let mut mcs = [0u8; 16];
        mcs.copy_from_slice(&body[3..19]);
        Some(Self {
            ht_capabilities_info: u16::from_le_bytes([body[0], body[1]]),
            a_mpdu_params: body[2],
            supported_mcs_set: mcs,
            ht_extended_capabilities: u16::from_le_bytes([body[19], body[20]]),
            tx_bf_capability_info: u32::from_le_bytes([body[21], body[22], body[23], body[24]]),
            asel_capabilities: body[25],
        })
    }

    /// 序列化为元素体
    pub fn to_bytes(&self) -> [u8; HT_CAPABILITIES_LEN] {
        let mut out = [0u8; HT_CAPABILITIES_LEN];
        out[0..2].copy_from_slice(&self.ht_capabilities_info.to_le_bytes());
        out[2] = self.a_mpdu_params;
        out[3..19].copy_from_slice(&self.supported_mcs_set);
        out[19..21].copy_from_slice(&self.ht_extended_capabilities.to_le_bytes());
        out[21..25].copy_from_slice(&self.tx_bf_capability_info.to_le_bytes());
        out[25] = self.asel_capabilities;
        out
    }
}

/// Capability Information 字段位（WLAN_CAPABILITY_*）
pub mod cap_info {
    pub const ESS: u16 = 1 << 0;
    pub const IBSS: u16 = 1 << 1;
    pub const PRIVACY: u16 = 1 << 4;
    pub const SHORT_PREAMBLE: u16 = 1 << 5;
    pub const PBCC: u16 = 1 << 6;
    pub const CHANNEL_AGILITY: u16 = 1 << 7;
    pub const SPECTRUM_MGMT: u16 = 1 << 8;
    pub const SHORT_SLOT_TIME: u16 = 1 << 10;
}

/// AP 侧站点标志（sta_set_flags 的 total/or/and 取值）
pub mod sta_flags {
    pub const AUTH: u32 = 1 << 0;
    pub const ASSOC: u32 = 1 << 1;
    pub const PS: u32 = 1 << 2;
    pub const TIM: u32 = 1 << 3;
    pub const PERM: u32 = 1 << 4;
    pub const AUTHORIZED: u32 = 1 << 5;
    pub const PENDING_POLL: u32 = 1 << 6;
    pub const SHORT_PREAMBLE: u32 = 1 << 7;
    pub const PREAUTH: u32 = 1 << 8;
    pub const WMM: u32 = 1 << 9;
    pub const MFP: u32 = 1 << 10;
    pub const HT: u32 = 1 << 11;
    pub const WPS: u32 = 1 << 12;
    pub const MAYBE_WPS: u32 = 1 << 13;
    pub const NONERP: u32 = 1 << 31;
}
