//! "none" 占位驱动
//!
//! 不控制任何硬件（仅作 RADIUS 服务器、WPS ER 等用途时绑定）。只实现 init/deinit，
//! 其余操作都落到分发层的默认值；[`HostapdData::drv_none`](crate::HostapdData::drv_none)
//! 据名字识别它。

use alloc::string::String;

use crate::caps::DriverCaps;
use crate::ops::{DriverOps, DrvPriv};
use crate::params::InitParams;

/// 保留的驱动名，真实驱动不得使用
pub const DRIVER_NONE_NAME: &str = "none";

/// 占位驱动
#[derive(Debug, Default)]
pub struct DriverNone;

pub static DRIVER_NONE: DriverNone = DriverNone;

/// 占位驱动的私有句柄：只记住接口名
#[derive(Debug)]
struct NoneDriverData {
    ifname: String,
}

impl DriverOps for DriverNone {
    fn name(&self) -> &'static str {
        DRIVER_NONE_NAME
    }

    fn desc(&self) -> &'static str {
        "no driver (RADIUS server/WPS ER)"
    }

    fn capabilities(&self) -> DriverCaps {
        DriverCaps::INIT.union(DriverCaps::DEINIT)
    }

    fn hapd_init(&self, params: &InitParams<'_>) -> Option<DrvPriv> {
        log::debug!(target: "hostap::hdrv", "DriverNone init ifname={}", params.ifname);
        Some(DrvPriv::new(NoneDriverData {
            ifname: String::from(params.ifname),
        }))
    }

    fn hapd_deinit(&self, drv_priv: DrvPriv) {
        if let Some(data) = drv_priv.downcast_ref::<NoneDriverData>() {
            log::debug!(target: "hostap::hdrv", "DriverNone deinit ifname={}", data.ifname);
        }
    }
}
