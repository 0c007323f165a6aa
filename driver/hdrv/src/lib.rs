//! AP 驱动操作分发层 (HDRV)
//!
//! 核心站点管理逻辑只与 [`HostapdData`] 打交道；它持有至多一个驱动后端
//! （[`DriverOps`]）与该后端的私有句柄（[`DrvPriv`]）。每个操作先检查
//! “已绑定驱动且声明了该能力”，不满足时返回固定默认值且没有任何副作用，
//! 满足时把参数封装成描述符交给驱动，驱动的返回值原样返回。
//!
//! 功能包括:
//! - 能力集 (caps) - 每个可选操作一位
//! - 驱动接口 (ops) - 可选操作 trait 与私有句柄
//! - 参数描述符 (params) - 单次调用内有效的参数值对象
//! - AP 上下文 (context) - 接口配置、驱动绑定
//! - 分发 (dispatch) - 统一的能力检查入口与各操作的默认值
//! - 占位驱动 (none) - 名为 "none" 的无驱动后端
//! - 驱动注册表 (registry) - 按名查找驱动
//! - 配置文本解析 (cfgfile)

#![no_std]

extern crate alloc;

mod caps;
mod cfgfile;
mod context;
mod dispatch;
pub mod errno;
mod none;
mod ops;
mod params;
mod registry;

#[cfg(test)]
mod test_utils;

pub use caps::DriverCaps;
pub use cfgfile::{parse_config, parse_mac_addr};
pub use context::{ApConf, BssConfig, HostapdData, HostapdIface, SSID_MAX_LEN};
pub use dispatch::{IF_OP_UNSUPPORTED, SCAN_UNSUPPORTED};
pub use none::{DriverNone, DRIVER_NONE, DRIVER_NONE_NAME};
pub use ops::{DriverOps, DrvPriv};
pub use params::{
    DriverIfType, FreqParams, IfAddParams, InitParams, RateSetsParams, ScanParams,
    StaAddParams, StaFlagsParams, TxQueueParams, WpaBssParams, MAX_SCAN_SSIDS,
};
pub use registry::{driver_lookup, driver_names, driver_register, driver_unregister};
