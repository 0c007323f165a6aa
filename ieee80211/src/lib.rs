//! # ieee80211: AP 驱动边界上的 802.11 值类型
//!
//! 核心逻辑与驱动后端之间传递的地址、信息元素、HT 能力、站点标志、
//! 硬件模式与扫描结果都定义在这里，两侧共享同一份类型。
//!
//! ## 模块
//!
//! | 模块      | 内容 |
//! |-----------|------|
//! | ieee80211 | 地址、信息元素 ID、HT 能力元素、能力位、站点标志 |
//! | cfg80211  | 扫描结果（scan2 / get_scan_results2 的返回值） |
//! | mac80211  | 硬件模式、信道、速率（get_hw_feature_data 的返回值） |

#![no_std]

extern crate alloc;

pub mod cfg80211;
pub mod ieee80211;
pub mod mac80211;

pub use cfg80211::{scan_flags, ScanRes, ScanResults};
pub use ieee80211::{
    cap_info, is_multicast_ether_addr, is_zero_ether_addr, sta_flags, HtCapabilities, MacAddr,
    WlanEid, BROADCAST_ADDR, ETH_ALEN, HT_CAPABILITIES_LEN, HT_OPERATION_LEN,
};
pub use mac80211::{chan_flags, ChannelData, HwFeatureData, HwMode, HwModes, Rate};
