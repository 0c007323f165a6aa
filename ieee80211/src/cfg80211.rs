//! 扫描结果
//!
//! 驱动 get_scan_results2 返回的 BSS 列表；IE 以原始字节保留，按需查找。

use alloc::vec::Vec;

use crate::ieee80211::{MacAddr, WlanEid};

/// ScanRes::flags 取值（WPA_SCAN_*）
pub mod scan_flags {
    /// qual 无效
    pub const QUAL_INVALID: u32 = 1 << 0;
    /// noise 无效
    pub const NOISE_INVALID: u32 = 1 << 1;
    /// level 无效
    pub const LEVEL_INVALID: u32 = 1 << 2;
    /// level 单位为 dBm
    pub const LEVEL_DBM: u32 = 1 << 3;
}

/// 单条扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRes {
    pub flags: u32,
    pub bssid: MacAddr,
    /// 频率 MHz
    pub freq: i32,
    pub beacon_int: u16,
    pub caps: u16,
    pub qual: i32,
    pub noise: i32,
    pub level: i32,
    pub tsf: u64,
    /// Probe Response / Beacon 中的全部 IE（EID, len, body ...）
    pub ies: Vec<u8>,
}

impl ScanRes {
    /// 查找首个 `eid` 元素，返回元素体；IE 截断时停止查找
    pub fn ie(&self, eid: WlanEid) -> Option<&[u8]> {
        let mut pos = 0;
        while pos + 2 <= self.ies.len() {
            let id = self.ies[pos];
            let len = self.ies[pos + 1] as usize;
            let end = pos + 2 + len;
            if end > self.ies.len() {
                return None;
            }
            if id == eid.as_u8() {
                return Some(&self.ies[pos + 2..end]);
            }
            pos = end;
        }
        None
    }

    /// SSID 元素体（最长 32 字节）
    pub fn ssid(&self) -> Option<&[u8]> {
        self.ie(WlanEid::Ssid).map(|s| &s[..s.len().min(32)])
    }

    pub fn level_dbm(&self) -> bool {
        self.flags & scan_flags::LEVEL_DBM != 0
    }
}

/// 扫描结果集
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResults {
    pub res: Vec<ScanRes>,
}

impl ScanResults {
    pub fn num(&self) -> usize {
        self.res.len()
    }

    pub fn is_empty(&self) -> bool {
        self.res.is_empty()
    }

    pub fn get(&self, bssid: &MacAddr) -> Option<&ScanRes> {
        self.res.iter().find(|r| r.bssid == *bssid)
    }
}
