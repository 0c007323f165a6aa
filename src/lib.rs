//! hostap: AP 驱动分发层
//!
//! 汇总两部分：
//! - ieee80211: 驱动边界上的 802.11 值类型
//! - hdrv: 能力检查、参数描述符、AP 上下文、占位驱动与驱动注册表
//!
//! 本 crate 再提供启动/拆除时的驱动绑定流程：按名查驱动、绑定、初始化并保存句柄。

#![no_std]

pub use hdrv;
pub use ieee80211;

use axerrno::AxResult;
use hdrv::{errno, DriverCaps, DrvPriv, HostapdData};
use ieee80211::MacAddr;

/// 按名绑定驱动并初始化，成功后句柄保存在上下文里。
///
/// - 已绑定驱动：Err(EBUSY)，上下文不变；需先 [`hostapd_teardown_driver`]
/// - 驱动名未登记：Err(ENODEV)，上下文不变
/// - 驱动声明了 init 但返回空句柄：解除绑定，Err(EIO)
/// - 驱动未声明 init：只绑定，句柄为空
pub fn hostapd_setup_driver(hapd: &mut HostapdData, name: &str, bssid: &MacAddr) -> Result<(), i32> {
    if let Some(bound) = hapd.driver() {
        log::warn!(target: "hostap", "{}: driver {} still bound", hapd.conf().iface, bound.name());
        return Err(errno::EBUSY);
    }
    let Some(driver) = hdrv::driver_lookup(name) else {
        log::error!(target: "hostap", "{}: unknown driver '{}'", hapd.conf().iface, name);
        return Err(errno::ENODEV);
    };
    hapd.bind_driver(driver);
    hapd.set_drv_priv(DrvPriv::empty());
    if !driver.capabilities().contains(DriverCaps::INIT) {
        log::info!(target: "hostap", "{}: driver {} has no init", hapd.conf().iface, name);
        return Ok(());
    }
    match hapd.driver_init(bssid) {
        Some(drv_priv) => {
            hapd.set_drv_priv(drv_priv);
            log::info!(target: "hostap", "{}: driver {} initialized", hapd.conf().iface, name);
            Ok(())
        }
        None => {
            log::error!(target: "hostap", "{}: driver {} init failed", hapd.conf().iface, name);
            hapd.unbind_driver();
            Err(errno::EIO)
        }
    }
}

/// 拆除驱动并解除绑定；结束后句柄总为空
///
/// 驱动未实现 deinit 时句柄留在上下文里，这里直接丢弃。
pub fn hostapd_teardown_driver(hapd: &mut HostapdData) {
    hapd.driver_deinit();
    if !hapd.take_drv_priv().is_empty() {
        log::debug!(target: "hostap", "{}: dropped handle without deinit", hapd.conf().iface);
    }
    if let Some(driver) = hapd.unbind_driver() {
        log::info!(target: "hostap", "{}: driver {} released", hapd.conf().iface, driver.name());
    }
}

/// 由配置文本创建第 `bss_idx` 个 BSS 的上下文，并绑定 "none" 占位驱动
///
/// 无硬件时也能持有一个有效上下文，上层统一经它调用驱动操作。
pub fn hostapd_init_none(config: &str, bss_idx: usize, own_addr: MacAddr) -> AxResult<HostapdData> {
    let iface = hdrv::parse_config(config)?;
    let mut hapd = HostapdData::new(iface, bss_idx, own_addr)?;
    let bssid = hapd.conf().bssid.unwrap_or(own_addr);
    hostapd_setup_driver(&mut hapd, hdrv::DRIVER_NONE_NAME, &bssid)
        .map_err(|_| axerrno::AxError::BadState)?;
    Ok(hapd)
}
