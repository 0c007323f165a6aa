//! 测试用记录驱动：把收到的每次调用（含描述符内容）记进句柄里的 [`CallLog`]

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use ieee80211::{HtCapabilities, HwFeatureData, HwMode, HwModes, MacAddr, ScanRes, ScanResults};

use crate::caps::DriverCaps;
use crate::context::{BssConfig, HostapdData, HostapdIface};
use crate::errno;
use crate::ops::{DriverOps, DrvPriv};
use crate::params::{
    DriverIfType, FreqParams, IfAddParams, InitParams, RateSetsParams, ScanParams, StaAddParams,
    StaFlagsParams, TxQueueParams, WpaBssParams,
};

/// 记录驱动默认返回的状态，与任何未支持默认值都不同
pub const STATUS: Result<(), i32> = Err(-71);

/// 状态为成功时 if_add 返回的接口标识
pub const IF_ID: i32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRecord {
    pub bssid: MacAddr,
    pub ifname: String,
    pub ssid: Vec<u8>,
    pub test_socket: Option<String>,
    pub use_pae_group_addr: bool,
    pub bridge: Vec<Option<String>>,
    pub own_addr: MacAddr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Init(InitRecord),
    SetIeee8021x {
        ifname: String,
        enabled: bool,
        wpa: i32,
        ieee802_1x: bool,
        wpa_group: i32,
        wpa_pairwise: i32,
        wpa_key_mgmt: i32,
        rsn_preauth: bool,
    },
    SetPrivacy { ifname: String, enabled: bool },
    GetSeqnum { ifname: String, addr: Option<MacAddr>, idx: i32, seq_len: usize },
    Flush,
    SetGenericElem { ifname: String, elem: Vec<u8> },
    GetSsid { ifname: String, buf_len: usize },
    SetSsid { ifname: String, ssid: Vec<u8> },
    SetCountermeasures(bool),
    StaAdd {
        ifname: String,
        addr: MacAddr,
        aid: u16,
        capability: u16,
        supp_rates: Vec<u8>,
        listen_interval: u16,
        ht: Option<HtCapabilities>,
    },
    SetFreq(FreqParams),
    SetRts(i32),
    SetFrag(i32),
    StaSetFlags { addr: MacAddr, total_flags: u32, flags_or: u32, flags_and: u32 },
    SetRateSets { supp: Vec<i32>, basic: Vec<i32>, mode: i32 },
    SetCountry(String),
    SetCtsProtect(i32),
    SetPreamble(i32),
    SetShortSlotTime(i32),
    SetTxQueueParams(TxQueueParams),
    ValidBssMask { addr: MacAddr, mask: MacAddr },
    IfAdd { iface: String, if_type: DriverIfType, ifname: String, addr: Option<MacAddr> },
    IfRemove { if_type: DriverIfType, ifname: String },
    GetHwFeatureData,
    Commit,
    SetHtParams { ifname: String, ht_capab: Vec<u8>, ht_oper: Vec<u8> },
    Scan { ssids: Vec<Vec<u8>>, extra_ies: Vec<u8>, freqs: Vec<i32> },
    GetScanResults,
}

/// 记录驱动的私有状态
#[derive(Debug)]
pub struct CallLog {
    pub calls: Vec<Call>,
    /// 返回 Result 的操作统一返回此值
    pub status: Result<(), i32>,
}

impl Default for CallLog {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            status: STATUS,
        }
    }
}

pub struct RecordingDriver {
    name: &'static str,
    caps: DriverCaps,
}

impl RecordingDriver {
    pub const fn new(name: &'static str, caps: DriverCaps) -> Self {
        Self { name, caps }
    }
}

pub static RECORD_ALL: RecordingDriver = RecordingDriver::new("record-all", DriverCaps::all());
pub static RECORD_NOTHING: RecordingDriver = RecordingDriver::new("record-nothing", DriverCaps::empty());
pub static RECORD_FREQ_ONLY: RecordingDriver = RecordingDriver::new("record-freq", DriverCaps::SET_FREQ);
pub static RECORD_SCAN_ONLY: RecordingDriver = RecordingDriver::new("record-scan", DriverCaps::SCAN);
pub static RECORD_RESULTS_ONLY: RecordingDriver =
    RecordingDriver::new("record-results", DriverCaps::GET_SCAN_RESULTS);

fn record(drv_priv: &mut DrvPriv, call: Call) -> Result<(), i32> {
    match drv_priv.downcast_mut::<CallLog>() {
        Some(log) => {
            log.calls.push(call);
            log.status
        }
        None => Err(errno::EINVAL),
    }
}

impl DriverOps for RecordingDriver {
    fn name(&self) -> &'static str {
        self.name
    }

    fn capabilities(&self) -> DriverCaps {
        self.caps
    }

    fn hapd_init(&self, params: &InitParams<'_>) -> Option<DrvPriv> {
        let init = InitRecord {
            bssid: *params.bssid,
            ifname: String::from(params.ifname),
            ssid: params.ssid.to_vec(),
            test_socket: params.test_socket.map(String::from),
            use_pae_group_addr: params.use_pae_group_addr,
            bridge: params.bridge.iter().map(|b| b.map(String::from)).collect(),
            own_addr: *params.own_addr,
        };
        Some(DrvPriv::new(CallLog {
            calls: vec![Call::Init(init)],
            ..Default::default()
        }))
    }

    fn hapd_deinit(&self, _priv: DrvPriv) {}

    fn set_ieee8021x(&self, drv_priv: &mut DrvPriv, p: &WpaBssParams<'_>) -> Result<(), i32> {
        record(
            drv_priv,
            Call::SetIeee8021x {
                ifname: String::from(p.ifname),
                enabled: p.enabled,
                wpa: p.wpa,
                ieee802_1x: p.ieee802_1x,
                wpa_group: p.wpa_group,
                wpa_pairwise: p.wpa_pairwise,
                wpa_key_mgmt: p.wpa_key_mgmt,
                rsn_preauth: p.rsn_preauth,
            },
        )
    }

    fn set_privacy(&self, ifname: &str, drv_priv: &mut DrvPriv, enabled: bool) -> Result<(), i32> {
        record(drv_priv, Call::SetPrivacy { ifname: String::from(ifname), enabled })
    }

    fn get_seqnum(
        &self,
        ifname: &str,
        drv_priv: &mut DrvPriv,
        addr: Option<&MacAddr>,
        idx: i32,
        seq: &mut [u8],
    ) -> Result<(), i32> {
        record(
            drv_priv,
            Call::GetSeqnum {
                ifname: String::from(ifname),
                addr: addr.copied(),
                idx,
                seq_len: seq.len(),
            },
        )
    }

    fn hapd_set_countermeasures(&self, drv_priv: &mut DrvPriv, enabled: bool) -> Result<(), i32> {
        record(drv_priv, Call::SetCountermeasures(enabled))
    }

    fn flush(&self, drv_priv: &mut DrvPriv) -> Result<(), i32> {
        record(drv_priv, Call::Flush)
    }

    fn set_generic_elem(&self, ifname: &str, drv_priv: &mut DrvPriv, elem: &[u8]) -> Result<(), i32> {
        record(drv_priv, Call::SetGenericElem { ifname: String::from(ifname), elem: elem.to_vec() })
    }

    fn hapd_get_ssid(&self, ifname: &str, drv_priv: &mut DrvPriv, buf: &mut [u8]) -> Result<usize, i32> {
        const SSID: &[u8] = b"drv-ssd";
        let _ = record(drv_priv, Call::GetSsid { ifname: String::from(ifname), buf_len: buf.len() });
        let n = SSID.len().min(buf.len());
        buf[..n].copy_from_slice(&SSID[..n]);
        Ok(n)
    }

    fn hapd_set_ssid(&self, ifname: &str, drv_priv: &mut DrvPriv, ssid: &[u8]) -> Result<(), i32> {
        record(drv_priv, Call::SetSsid { ifname: String::from(ifname), ssid: ssid.to_vec() })
    }

    fn set_country(&self, drv_priv: &mut DrvPriv, country: &str) -> Result<(), i32> {
        record(drv_priv, Call::SetCountry(String::from(country)))
    }

    fn commit(&self, drv_priv: &mut DrvPriv) -> Result<(), i32> {
        record(drv_priv, Call::Commit)
    }

    fn sta_add(&self, ifname: &str, drv_priv: &mut DrvPriv, p: &StaAddParams<'_>) -> Result<(), i32> {
        record(
            drv_priv,
            Call::StaAdd {
                ifname: String::from(ifname),
                addr: *p.addr,
                aid: p.aid,
                capability: p.capability,
                supp_rates: p.supp_rates.to_vec(),
                listen_interval: p.listen_interval,
                ht: p.ht_capabilities.copied(),
            },
        )
    }

    fn sta_set_flags(&self, drv_priv: &mut DrvPriv, p: &StaFlagsParams<'_>) -> Result<(), i32> {
        record(
            drv_priv,
            Call::StaSetFlags {
                addr: *p.addr,
                total_flags: p.total_flags,
                flags_or: p.flags_or,
                flags_and: p.flags_and,
            },
        )
    }

    fn valid_bss_mask(&self, drv_priv: &mut DrvPriv, addr: &MacAddr, mask: &MacAddr) -> bool {
        let _ = record(drv_priv, Call::ValidBssMask { addr: *addr, mask: *mask });
        false
    }

    fn set_freq(&self, drv_priv: &mut DrvPriv, freq: &FreqParams) -> Result<(), i32> {
        record(drv_priv, Call::SetFreq(*freq))
    }

    fn set_rts(&self, drv_priv: &mut DrvPriv, rts: i32) -> Result<(), i32> {
        record(drv_priv, Call::SetRts(rts))
    }

    fn set_frag(&self, drv_priv: &mut DrvPriv, frag: i32) -> Result<(), i32> {
        record(drv_priv, Call::SetFrag(frag))
    }

    fn set_rate_sets(&self, drv_priv: &mut DrvPriv, p: &RateSetsParams<'_>) -> Result<(), i32> {
        record(
            drv_priv,
            Call::SetRateSets {
                supp: p.supp_rates.to_vec(),
                basic: p.basic_rates.to_vec(),
                mode: p.mode,
            },
        )
    }

    fn set_cts_protect(&self, drv_priv: &mut DrvPriv, value: i32) -> Result<(), i32> {
        record(drv_priv, Call::SetCtsProtect(value))
    }

    fn set_preamble(&self, drv_priv: &mut DrvPriv, value: i32) -> Result<(), i32> {
        record(drv_priv, Call::SetPreamble(value))
    }

    fn set_short_slot_time(&self, drv_priv: &mut DrvPriv, value: i32) -> Result<(), i32> {
        record(drv_priv, Call::SetShortSlotTime(value))
    }

    fn set_tx_queue_params(&self, drv_priv: &mut DrvPriv, p: &TxQueueParams) -> Result<(), i32> {
        record(drv_priv, Call::SetTxQueueParams(*p))
    }

    fn set_ht_params(
        &self,
        ifname: &str,
        drv_priv: &mut DrvPriv,
        ht_capab: &[u8],
        ht_oper: &[u8],
    ) -> Result<(), i32> {
        record(
            drv_priv,
            Call::SetHtParams {
                ifname: String::from(ifname),
                ht_capab: ht_capab.to_vec(),
                ht_oper: ht_oper.to_vec(),
            },
        )
    }

    fn get_hw_feature_data(&self, drv_priv: &mut DrvPriv) -> Option<HwFeatureData> {
        let _ = record(drv_priv, Call::GetHwFeatureData);
        Some(HwFeatureData {
            modes: vec![HwModes {
                mode: HwMode::Ieee80211G,
                ..Default::default()
            }],
            flags: 0,
        })
    }

    fn if_add(&self, iface: &str, drv_priv: &mut DrvPriv, p: &IfAddParams<'_>) -> Result<i32, i32> {
        record(
            drv_priv,
            Call::IfAdd {
                iface: String::from(iface),
                if_type: p.if_type,
                ifname: String::from(p.ifname),
                addr: p.addr.copied(),
            },
        )
        .map(|()| IF_ID)
    }

    fn if_remove(&self, drv_priv: &mut DrvPriv, if_type: DriverIfType, ifname: &str) -> Result<(), i32> {
        record(drv_priv, Call::IfRemove { if_type, ifname: String::from(ifname) })
    }

    fn scan2(&self, drv_priv: &mut DrvPriv, p: &ScanParams<'_>) -> Result<(), i32> {
        record(
            drv_priv,
            Call::Scan {
                ssids: p.ssids.iter().map(|s| s.to_vec()).collect(),
                extra_ies: p.extra_ies.to_vec(),
                freqs: p.freqs.to_vec(),
            },
        )
    }

    fn get_scan_results2(&self, drv_priv: &mut DrvPriv) -> Option<ScanResults> {
        let _ = record(drv_priv, Call::GetScanResults);
        Some(ScanResults {
            res: vec![ScanRes {
                bssid: [0x02, 0, 0, 0, 0, 0x77],
                freq: 2412,
                ..Default::default()
            }],
        })
    }
}

/// 三个 BSS 共享 wlan0，上下文对应中间那个（无网桥）
pub fn test_hapd(driver: Option<&'static dyn DriverOps>) -> HostapdData {
    let iface = HostapdIface::new(vec![
        BssConfig::new("wlan0").with_bridge("br0"),
        BssConfig::new("wlan0_1")
            .with_ssid(b"test-ap")
            .with_test_socket("/tmp/test-sock")
            .with_pae_group_addr(true),
        BssConfig::new("wlan0_2").with_bridge("br2"),
    ]);
    let mut hapd = HostapdData::new(iface, 1, [0x02, 0, 0, 0, 0, 0x01]).unwrap();
    if let Some(drv) = driver {
        hapd.bind_driver(drv);
    }
    hapd.set_drv_priv(DrvPriv::new(CallLog::default()));
    hapd
}

/// 句柄里记录到的调用
pub fn calls(hapd: &HostapdData) -> &[Call] {
    hapd.drv_priv()
        .downcast_ref::<CallLog>()
        .map(|log| log.calls.as_slice())
        .unwrap_or(&[])
}
