//! 硬件能力
//!
//! get_hw_feature_data 的返回值：每种硬件模式一项，含信道表、速率表与 HT 能力。

use alloc::vec::Vec;

/// 硬件模式（hostapd_hw_mode）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum HwMode {
    Ieee80211B = 0,
    #[default]
    Ieee80211G = 1,
    Ieee80211A = 2,
}

impl HwMode {
    pub const fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Ieee80211B),
            1 => Some(Self::Ieee80211G),
            2 => Some(Self::Ieee80211A),
            _ => None,
        }
    }

    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

/// ChannelData::flag 取值（HOSTAPD_CHAN_*）
pub mod chan_flags {
    pub const DISABLED: i32 = 1 << 0;
    pub const PASSIVE_SCAN: i32 = 1 << 1;
    pub const NO_IBSS: i32 = 1 << 2;
    pub const RADAR: i32 = 1 << 3;
    pub const HT40PLUS: i32 = 1 << 4;
    pub const HT40MINUS: i32 = 1 << 5;
}

/// 信道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelData {
    pub chan: u16,
    /// 中心频率 MHz
    pub freq: i32,
    pub flag: i32,
    /// 最大发射功率 dBm
    pub max_tx_power: u8,
}

impl ChannelData {
    pub fn is_disabled(&self) -> bool {
        self.flag & chan_flags::DISABLED != 0
    }
}

/// 速率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rate {
    /// 100 kbps 单位（如 10 表示 1 Mbps）
    pub rate: i32,
    pub flags: i32,
}

/// 单个硬件模式的能力
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HwModes {
    pub mode: HwMode,
    pub channels: Vec<ChannelData>,
    pub rates: Vec<Rate>,
    pub ht_capab: u16,
    pub mcs_set: [u8; 16],
    pub a_mpdu_params: u8,
}

impl HwModes {
    pub fn channel_by_freq(&self, freq: i32) -> Option<&ChannelData> {
        self.channels.iter().find(|c| c.freq == freq)
    }
}

/// get_hw_feature_data 结果：模式列表与驱动标志
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HwFeatureData {
    pub modes: Vec<HwModes>,
    pub flags: u16,
}

impl HwFeatureData {
    pub fn num_modes(&self) -> u16 {
        u16::try_from(self.modes.len()).unwrap_or(u16::MAX)
    }

    pub fn mode(&self, mode: HwMode) -> Option<&HwModes> {
        self.modes.iter().find(|m| m.mode == mode)
    }
}
