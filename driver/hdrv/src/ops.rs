//! 驱动后端接口
//!
//! 驱动实现 [`DriverOps`]，在 `capabilities()` 里声明实现了哪些操作。
//! 未声明的操作分发层不会调用；各方法的默认实现返回与分发层相同的默认值，
//! 驱动只需覆盖自己声明的那部分。

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use ieee80211::{HwFeatureData, MacAddr, ScanResults};

use crate::caps::DriverCaps;
use crate::dispatch::{IF_OP_UNSUPPORTED, SCAN_UNSUPPORTED};
use crate::params::{
    DriverIfType, FreqParams, IfAddParams, InitParams, RateSetsParams, ScanParams, StaAddParams,
    StaFlagsParams, TxQueueParams, WpaBssParams,
};

/// 驱动私有句柄
///
/// 由驱动的 `hapd_init` 创建、存放在 AP 上下文里，之后每次调用都原样交还给驱动。
/// 分发层不解释其内容；驱动用 `downcast_ref` / `downcast_mut` 取回自己的状态类型。
#[derive(Default)]
pub struct DrvPriv(Option<Box<dyn Any>>);

impl DrvPriv {
    pub fn new<T: Any>(data: T) -> Self {
        Self(Some(Box::new(data)))
    }

    /// 空句柄（驱动未初始化或初始化失败）
    pub const fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_ref().and_then(|b| b.downcast_ref::<T>())
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.0.as_mut().and_then(|b| b.downcast_mut::<T>())
    }
}

impl fmt::Debug for DrvPriv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("DrvPriv(empty)")
        } else {
            f.write_str("DrvPriv(..)")
        }
    }
}

/// 驱动后端操作表
///
/// 驱动以 `&'static` 形式绑定到 AP 上下文（与静态驱动表一致），因此要求 `Sync`；
/// 可变状态放在 [`DrvPriv`] 里。
/// 返回 `Result<_, i32>` 的操作错误值为负 errno，分发层原样透传。
pub trait DriverOps: Sync {
    /// 驱动名；整个生命周期内不变。"none" 保留给占位驱动
    fn name(&self) -> &'static str;

    fn desc(&self) -> &'static str {
        ""
    }

    /// 已实现的操作
    fn capabilities(&self) -> DriverCaps;

    // ---------- 生命周期 ----------
    fn hapd_init(&self, _params: &InitParams<'_>) -> Option<DrvPriv> {
        None
    }
    fn hapd_deinit(&self, _priv: DrvPriv) {}

    // ---------- 安全 ----------
    fn set_ieee8021x(&self, _priv: &mut DrvPriv, _params: &WpaBssParams<'_>) -> Result<(), i32> {
        Ok(())
    }
    fn set_privacy(&self, _ifname: &str, _priv: &mut DrvPriv, _enabled: bool) -> Result<(), i32> {
        Ok(())
    }
    /// 读取密钥 TSC/PN 写入 `seq`；`addr` 为 None 表示组密钥
    fn get_seqnum(
        &self,
        _ifname: &str,
        _priv: &mut DrvPriv,
        _addr: Option<&MacAddr>,
        _idx: i32,
        _seq: &mut [u8],
    ) -> Result<(), i32> {
        Ok(())
    }
    fn hapd_set_countermeasures(&self, _priv: &mut DrvPriv, _enabled: bool) -> Result<(), i32> {
        Ok(())
    }

    // ---------- BSS 配置 ----------
    fn flush(&self, _priv: &mut DrvPriv) -> Result<(), i32> {
        Ok(())
    }
    fn set_generic_elem(&self, _ifname: &str, _priv: &mut DrvPriv, _elem: &[u8]) -> Result<(), i32> {
        Ok(())
    }
    /// 读取当前 SSID 到 `buf`，返回长度
    fn hapd_get_ssid(&self, _ifname: &str, _priv: &mut DrvPriv, _buf: &mut [u8]) -> Result<usize, i32> {
        Ok(0)
    }
    fn hapd_set_ssid(&self, _ifname: &str, _priv: &mut DrvPriv, _ssid: &[u8]) -> Result<(), i32> {
        Ok(())
    }
    fn set_country(&self, _priv: &mut DrvPriv, _country: &str) -> Result<(), i32> {
        Ok(())
    }
    fn commit(&self, _priv: &mut DrvPriv) -> Result<(), i32> {
        Ok(())
    }

    // ---------- 站点 ----------
    fn sta_add(&self, _ifname: &str, _priv: &mut DrvPriv, _params: &StaAddParams<'_>) -> Result<(), i32> {
        Ok(())
    }
    fn sta_set_flags(&self, _priv: &mut DrvPriv, _params: &StaFlagsParams<'_>) -> Result<(), i32> {
        Ok(())
    }
    fn valid_bss_mask(&self, _priv: &mut DrvPriv, _addr: &MacAddr, _mask: &MacAddr) -> bool {
        true
    }

    // ---------- 信道与 PHY ----------
    fn set_freq(&self, _priv: &mut DrvPriv, _freq: &FreqParams) -> Result<(), i32> {
        Ok(())
    }
    fn set_rts(&self, _priv: &mut DrvPriv, _rts: i32) -> Result<(), i32> {
        Ok(())
    }
    fn set_frag(&self, _priv: &mut DrvPriv, _frag: i32) -> Result<(), i32> {
        Ok(())
    }
    fn set_rate_sets(&self, _priv: &mut DrvPriv, _params: &RateSetsParams<'_>) -> Result<(), i32> {
        Ok(())
    }
    fn set_cts_protect(&self, _priv: &mut DrvPriv, _value: i32) -> Result<(), i32> {
        Ok(())
    }
    fn set_preamble(&self, _priv: &mut DrvPriv, _value: i32) -> Result<(), i32> {
        Ok(())
    }
    fn set_short_slot_time(&self, _priv: &mut DrvPriv, _value: i32) -> Result<(), i32> {
        Ok(())
    }
    fn set_tx_queue_params(&self, _priv: &mut DrvPriv, _params: &TxQueueParams) -> Result<(), i32> {
        Ok(())
    }
    fn set_ht_params(
        &self,
        _ifname: &str,
        _priv: &mut DrvPriv,
        _ht_capab: &[u8],
        _ht_oper: &[u8],
    ) -> Result<(), i32> {
        Ok(())
    }
    fn get_hw_feature_data(&self, _priv: &mut DrvPriv) -> Option<HwFeatureData> {
        None
    }

    // ---------- 虚拟接口 ----------
    /// `iface` 为本 BSS 所在的物理接口名；成功时可返回驱动分配的接口标识（非负）
    fn if_add(&self, _iface: &str, _priv: &mut DrvPriv, _params: &IfAddParams<'_>) -> Result<i32, i32> {
        Err(IF_OP_UNSUPPORTED)
    }
    fn if_remove(&self, _priv: &mut DrvPriv, _if_type: DriverIfType, _ifname: &str) -> Result<(), i32> {
        Err(IF_OP_UNSUPPORTED)
    }

    // ---------- 扫描 ----------
    fn scan2(&self, _priv: &mut DrvPriv, _params: &ScanParams<'_>) -> Result<(), i32> {
        Err(SCAN_UNSUPPORTED)
    }
    fn get_scan_results2(&self, _priv: &mut DrvPriv) -> Option<ScanResults> {
        None
    }
}
