//! 参数描述符
//!
//! 每个描述符只在一次调用内有效，由分发层一次性构造后交给驱动，驱动不得保留。
//! 调用方未给出的字段取类型零值（`Default`）。

use alloc::vec::Vec;

use ieee80211::{HtCapabilities, HwMode, MacAddr};

/// 驱动初始化参数（hapd_init）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitParams<'a> {
    pub bssid: &'a MacAddr,
    pub ifname: &'a str,
    pub ssid: &'a [u8],
    pub test_socket: Option<&'a str>,
    pub use_pae_group_addr: bool,
    /// 同一物理接口上每个 BSS 一项，按 BSS 序；未配置网桥的 BSS 为 None
    pub bridge: Vec<Option<&'a str>>,
    pub own_addr: &'a MacAddr,
}

impl InitParams<'_> {
    pub fn ssid_len(&self) -> usize {
        self.ssid.len()
    }

    pub fn num_bridge(&self) -> usize {
        self.bridge.len()
    }
}

/// IEEE 802.1X / WPA 参数（set_ieee8021x）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WpaBssParams<'a> {
    pub ifname: &'a str,
    pub enabled: bool,
    pub wpa: i32,
    pub ieee802_1x: bool,
    pub wpa_group: i32,
    pub wpa_pairwise: i32,
    pub wpa_key_mgmt: i32,
    pub rsn_preauth: bool,
}

/// 新增关联站点（sta_add）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaAddParams<'a> {
    pub addr: &'a MacAddr,
    pub aid: u16,
    pub capability: u16,
    /// 支持速率，长度即速率个数（不以 0 结尾）
    pub supp_rates: &'a [u8],
    pub listen_interval: u16,
    /// 非 HT 站点为 None
    pub ht_capabilities: Option<&'a HtCapabilities>,
}

impl StaAddParams<'_> {
    pub fn supp_rates_len(&self) -> usize {
        self.supp_rates.len()
    }
}

/// 信道参数（set_freq）；取值范围由驱动检查
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreqParams {
    /// 硬件模式（HwMode 的数值）
    pub mode: i32,
    /// MHz
    pub freq: i32,
    pub channel: i32,
    pub ht_enabled: bool,
    /// 0 / 1（次信道在上）/ -1（次信道在下）
    pub sec_channel_offset: i32,
}

impl FreqParams {
    pub fn hw_mode(&self) -> Option<HwMode> {
        HwMode::from_i32(self.mode)
    }
}

/// 站点标志更新（sta_set_flags）：新标志 = (旧 | flags_or) & flags_and
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaFlagsParams<'a> {
    pub addr: &'a MacAddr,
    pub total_flags: u32,
    pub flags_or: u32,
    pub flags_and: u32,
}

/// 速率集（set_rate_sets），单位 100 kbps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateSetsParams<'a> {
    pub supp_rates: &'a [i32],
    pub basic_rates: &'a [i32],
    pub mode: i32,
}

/// 发送队列 EDCA 参数（set_tx_queue_params）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxQueueParams {
    pub queue: i32,
    pub aifs: i32,
    pub cw_min: i32,
    pub cw_max: i32,
    /// 单位 100 us
    pub burst_time: i32,
}

/// 虚拟接口类型（if_add / if_remove）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum DriverIfType {
    Station = 0,
    ApVlan = 1,
    #[default]
    ApBss = 2,
}

/// 新增虚拟接口（if_add）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IfAddParams<'a> {
    pub if_type: DriverIfType,
    pub ifname: &'a str,
    /// 为 None 时由驱动分配地址
    pub addr: Option<&'a MacAddr>,
}

/// 单次扫描最多携带的 SSID 数
pub const MAX_SCAN_SSIDS: usize = 4;

/// 扫描请求（scan2）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanParams<'a> {
    /// 要探测的 SSID；空 SSID 表示通配
    pub ssids: &'a [&'a [u8]],
    /// 附加到 Probe Request 的 IE
    pub extra_ies: &'a [u8],
    /// 扫描频率（MHz）；空表示驱动支持的全部信道
    pub freqs: &'a [i32],
}

impl ScanParams<'_> {
    pub fn num_ssids(&self) -> usize {
        self.ssids.len().min(MAX_SCAN_SSIDS)
    }
}
