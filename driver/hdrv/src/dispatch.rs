//! 驱动操作分发
//!
//! 所有操作走同一个入口 [`HostapdData::driver_op`]：未绑定驱动或驱动未声明该能力时
//! 直接返回该操作的默认值，不构造描述符、不触碰句柄；否则构造描述符并调用驱动，
//! 返回值原样透传，分发层不重试、不改写。
//!
//! | 返回语义 | 未支持时 |
//! |----------|----------|
//! | 成功/失败 | `Ok(())` / `Ok(0)` |
//! | 句柄/数据 | `None` |
//! | BSS 地址合法性查询 | `true` |
//! | if_add / if_remove | `Err(IF_OP_UNSUPPORTED)` |
//! | scan | `Err(SCAN_UNSUPPORTED)` |

use alloc::vec::Vec;

use ieee80211::{HtCapabilities, HwFeatureData, MacAddr, ScanResults};

use crate::caps::DriverCaps;
use crate::context::{ApConf, HostapdData};
use crate::none::DRIVER_NONE_NAME;
use crate::ops::{DriverOps, DrvPriv};
use crate::params::{
    DriverIfType, FreqParams, IfAddParams, InitParams, RateSetsParams, ScanParams, StaAddParams,
    StaFlagsParams, TxQueueParams, WpaBssParams,
};

/// if_add / if_remove 未支持时的返回值
pub const IF_OP_UNSUPPORTED: i32 = -1;

/// scan 未支持时的返回值
pub const SCAN_UNSUPPORTED: i32 = -1;

impl HostapdData {
    /// 能力检查入口：驱动已绑定且声明了 `op` 时调用 `call`，否则返回 `default`
    fn driver_op<R>(
        &mut self,
        op: DriverCaps,
        default: R,
        call: impl FnOnce(&'static dyn DriverOps, &ApConf, &mut DrvPriv) -> R,
    ) -> R {
        match self.driver {
            Some(drv) if drv.capabilities().contains(op) => call(drv, &self.conf, &mut self.drv_priv),
            Some(drv) => {
                log::trace!(target: "hostap::hdrv", "driver {} lacks {:?}", drv.name(), op);
                default
            }
            None => {
                log::trace!(target: "hostap::hdrv", "{:?}: no driver bound", op);
                default
            }
        }
    }

    /// 初始化驱动，返回驱动私有句柄；调用方负责 [`set_drv_priv`](Self::set_drv_priv)。
    ///
    /// 网桥列表按物理接口上的 BSS 数分配，未配置网桥的 BSS 为 None；
    /// 列表分配失败时不调用驱动，返回 None。
    pub fn driver_init(&mut self, bssid: &MacAddr) -> Option<DrvPriv> {
        self.driver_op(DriverCaps::INIT, None, |drv, ap, _| {
            let iface = ap.iface();
            let mut bridge = Vec::new();
            if bridge.try_reserve_exact(iface.num_bss()).is_err() {
                log::error!(
                    target: "hostap::hdrv",
                    "{}: no memory for {} bridge slots",
                    ap.conf().iface,
                    iface.num_bss()
                );
                return None;
            }
            bridge.extend(iface.bss.iter().map(|bss| bss.bridge()));

            let conf = ap.conf();
            let params = InitParams {
                bssid,
                ifname: &conf.iface,
                ssid: &conf.ssid,
                test_socket: conf.test_socket.as_deref(),
                use_pae_group_addr: conf.use_pae_group_addr,
                bridge,
                own_addr: ap.own_addr(),
            };
            drv.hapd_init(&params)
        })
    }

    /// 拆除驱动：句柄移交给驱动释放。驱动未实现 deinit 时什么都不做，句柄保留
    pub fn driver_deinit(&mut self) {
        self.driver_op(DriverCaps::DEINIT, (), |drv, _, drv_priv| {
            drv.hapd_deinit(core::mem::take(drv_priv))
        })
    }

    pub fn set_ieee8021x(&mut self, params: &WpaBssParams<'_>) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_IEEE8021X, Ok(()), |drv, _, drv_priv| {
            drv.set_ieee8021x(drv_priv, params)
        })
    }

    pub fn set_privacy(&mut self, enabled: bool) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_PRIVACY, Ok(()), |drv, ap, drv_priv| {
            drv.set_privacy(&ap.conf().iface, drv_priv, enabled)
        })
    }

    pub fn get_seqnum(
        &mut self,
        ifname: &str,
        addr: Option<&MacAddr>,
        idx: i32,
        seq: &mut [u8],
    ) -> Result<(), i32> {
        self.driver_op(DriverCaps::GET_SEQNUM, Ok(()), |drv, _, drv_priv| {
            drv.get_seqnum(ifname, drv_priv, addr, idx, seq)
        })
    }

    pub fn flush(&mut self) -> Result<(), i32> {
        self.driver_op(DriverCaps::FLUSH, Ok(()), |drv, _, drv_priv| drv.flush(drv_priv))
    }

    pub fn set_generic_elem(&mut self, elem: &[u8]) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_GENERIC_ELEM, Ok(()), |drv, ap, drv_priv| {
            drv.set_generic_elem(&ap.conf().iface, drv_priv, elem)
        })
    }

    /// 读取驱动当前 SSID，返回写入 `buf` 的长度
    pub fn get_ssid(&mut self, buf: &mut [u8]) -> Result<usize, i32> {
        self.driver_op(DriverCaps::GET_SSID, Ok(0), |drv, ap, drv_priv| {
            drv.hapd_get_ssid(&ap.conf().iface, drv_priv, buf)
        })
    }

    pub fn set_ssid(&mut self, ssid: &[u8]) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_SSID, Ok(()), |drv, ap, drv_priv| {
            drv.hapd_set_ssid(&ap.conf().iface, drv_priv, ssid)
        })
    }

    pub fn set_countermeasures(&mut self, enabled: bool) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_COUNTERMEASURES, Ok(()), |drv, _, drv_priv| {
            drv.hapd_set_countermeasures(drv_priv, enabled)
        })
    }

    /// 新增站点；`ht_capabilities` 为 None 时原样交给驱动
    #[allow(clippy::too_many_arguments)]
    pub fn sta_add(
        &mut self,
        ifname: &str,
        addr: &MacAddr,
        aid: u16,
        capability: u16,
        supp_rates: &[u8],
        listen_interval: u16,
        ht_capabilities: Option<&HtCapabilities>,
    ) -> Result<(), i32> {
        self.driver_op(DriverCaps::STA_ADD, Ok(()), |drv, _, drv_priv| {
            let params = StaAddParams {
                addr,
                aid,
                capability,
                supp_rates,
                listen_interval,
                ht_capabilities,
            };
            drv.sta_add(ifname, drv_priv, &params)
        })
    }

    pub fn set_freq(
        &mut self,
        mode: i32,
        freq: i32,
        channel: i32,
        ht_enabled: bool,
        sec_channel_offset: i32,
    ) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_FREQ, Ok(()), |drv, _, drv_priv| {
            let data = FreqParams {
                mode,
                freq,
                channel,
                ht_enabled,
                sec_channel_offset,
            };
            drv.set_freq(drv_priv, &data)
        })
    }

    pub fn set_rts(&mut self, rts: i32) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_RTS, Ok(()), |drv, _, drv_priv| drv.set_rts(drv_priv, rts))
    }

    pub fn set_frag(&mut self, frag: i32) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_FRAG, Ok(()), |drv, _, drv_priv| drv.set_frag(drv_priv, frag))
    }

    pub fn sta_set_flags(
        &mut self,
        addr: &MacAddr,
        total_flags: u32,
        flags_or: u32,
        flags_and: u32,
    ) -> Result<(), i32> {
        self.driver_op(DriverCaps::STA_SET_FLAGS, Ok(()), |drv, _, drv_priv| {
            let params = StaFlagsParams {
                addr,
                total_flags,
                flags_or,
                flags_and,
            };
            drv.sta_set_flags(drv_priv, &params)
        })
    }

    pub fn set_rate_sets(&mut self, supp_rates: &[i32], basic_rates: &[i32], mode: i32) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_RATE_SETS, Ok(()), |drv, _, drv_priv| {
            let params = RateSetsParams {
                supp_rates,
                basic_rates,
                mode,
            };
            drv.set_rate_sets(drv_priv, &params)
        })
    }

    pub fn set_country(&mut self, country: &str) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_COUNTRY, Ok(()), |drv, _, drv_priv| {
            drv.set_country(drv_priv, country)
        })
    }

    pub fn set_cts_protect(&mut self, value: i32) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_CTS_PROTECT, Ok(()), |drv, _, drv_priv| {
            drv.set_cts_protect(drv_priv, value)
        })
    }

    pub fn set_preamble(&mut self, value: i32) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_PREAMBLE, Ok(()), |drv, _, drv_priv| {
            drv.set_preamble(drv_priv, value)
        })
    }

    pub fn set_short_slot_time(&mut self, value: i32) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_SHORT_SLOT_TIME, Ok(()), |drv, _, drv_priv| {
            drv.set_short_slot_time(drv_priv, value)
        })
    }

    pub fn set_tx_queue_params(
        &mut self,
        queue: i32,
        aifs: i32,
        cw_min: i32,
        cw_max: i32,
        burst_time: i32,
    ) -> Result<(), i32> {
        self.driver_op(DriverCaps::SET_TX_QUEUE_PARAMS, Ok(()), |drv, _, drv_priv| {
            let params = TxQueueParams {
                queue,
                aifs,
                cw_min,
                cw_max,
                burst_time,
            };
            drv.set_tx_queue_params(drv_priv, &params)
        })
    }

    /// `addr` 是否落在 `mask` 描述的 BSS 地址范围内；驱动不支持时视为不受限
    pub fn valid_bss_mask(&mut self, addr: &MacAddr, mask: &MacAddr) -> bool {
        self.driver_op(DriverCaps::VALID_BSS_MASK, true, |drv, _, drv_priv| {
            drv.valid_bss_mask(drv_priv, addr, mask)
        })
    }

    /// 新增虚拟接口；驱动返回的接口标识原样透传
    pub fn if_add(&mut self, if_type: DriverIfType, ifname: &str, addr: Option<&MacAddr>) -> Result<i32, i32> {
        self.driver_op(DriverCaps::IF_ADD, Err(IF_OP_UNSUPPORTED), |drv, ap, drv_priv| {
            let params = IfAddParams {
                if_type,
                ifname,
                addr,
            };
            drv.if_add(&ap.conf().iface, drv_priv, &params)
        })
    }

    pub fn if_remove(&mut self, if_type: DriverIfType, ifname: &str) -> Result<(), i32> {
        self.driver_op(DriverCaps::IF_REMOVE, Err(IF_OP_UNSUPPORTED), |drv, _, drv_priv| {
            drv.if_remove(drv_priv, if_type, ifname)
        })
    }

    pub fn get_hw_feature_data(&mut self) -> Option<HwFeatureData> {
        self.driver_op(DriverCaps::GET_HW_FEATURE_DATA, None, |drv, _, drv_priv| {
            drv.get_hw_feature_data(drv_priv)
        })
    }

    pub fn driver_commit(&mut self) -> Result<(), i32> {
        self.driver_op(DriverCaps::COMMIT, Ok(()), |drv, _, drv_priv| drv.commit(drv_priv))
    }

    /// 下发 HT Capabilities / HT Operation 元素；任一缺失即按未支持处理
    pub fn set_ht_params(
        &mut self,
        ifname: &str,
        ht_capab: Option<&[u8]>,
        ht_oper: Option<&[u8]>,
    ) -> Result<(), i32> {
        let (Some(ht_capab), Some(ht_oper)) = (ht_capab, ht_oper) else {
            return Ok(());
        };
        self.driver_op(DriverCaps::SET_HT_PARAMS, Ok(()), |drv, _, drv_priv| {
            drv.set_ht_params(ifname, drv_priv, ht_capab, ht_oper)
        })
    }

    /// 是否绑定了 "none" 占位驱动
    pub fn drv_none(&self) -> bool {
        self.driver.is_some_and(|drv| drv.name() == DRIVER_NONE_NAME)
    }

    pub fn driver_scan(&mut self, params: &ScanParams<'_>) -> Result<(), i32> {
        self.driver_op(DriverCaps::SCAN, Err(SCAN_UNSUPPORTED), |drv, _, drv_priv| {
            drv.scan2(drv_priv, params)
        })
    }

    pub fn driver_get_scan_results(&mut self) -> Option<ScanResults> {
        self.driver_op(DriverCaps::GET_SCAN_RESULTS, None, |drv, _, drv_priv| {
            drv.get_scan_results2(drv_priv)
        })
    }
}
