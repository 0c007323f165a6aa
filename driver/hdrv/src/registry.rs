//! 驱动注册表
//!
//! 按名字登记 `&'static dyn DriverOps`，启动时由配置里的驱动名查回。
//! "none" 总是解析为内置占位驱动，不允许其它驱动占用这个名字。

use alloc::vec::Vec;

use spin::Mutex;

use crate::errno::{EBUSY, EINVAL};
use crate::none::{DRIVER_NONE, DRIVER_NONE_NAME};
use crate::ops::DriverOps;

static DRIVERS: Mutex<Vec<&'static dyn DriverOps>> = Mutex::new(Vec::new());

/// 登记驱动。
///
/// 名字为空或为 "none" 返回 Err(EINVAL)；同名驱动已登记返回 Err(EBUSY)。
pub fn driver_register(driver: &'static dyn DriverOps) -> Result<(), i32> {
    let name = driver.name();
    if name.is_empty() || name == DRIVER_NONE_NAME {
        log::warn!(target: "hostap::registry", "refuse to register driver named {:?}", name);
        return Err(EINVAL);
    }
    let mut drivers = DRIVERS.lock();
    if drivers.iter().any(|d| d.name() == name) {
        return Err(EBUSY);
    }
    drivers.push(driver);
    log::info!(target: "hostap::registry", "driver {} registered ({})", name, driver.desc());
    Ok(())
}

/// 注销驱动；未登记返回 false
pub fn driver_unregister(name: &str) -> bool {
    let mut drivers = DRIVERS.lock();
    let before = drivers.len();
    drivers.retain(|d| d.name() != name);
    drivers.len() != before
}

/// 按名查找驱动
pub fn driver_lookup(name: &str) -> Option<&'static dyn DriverOps> {
    if name == DRIVER_NONE_NAME {
        return Some(&DRIVER_NONE);
    }
    DRIVERS.lock().iter().copied().find(|d| d.name() == name)
}

/// 已登记驱动名（不含 "none"），按登记顺序
pub fn driver_names() -> Vec<&'static str> {
    DRIVERS.lock().iter().map(|d| d.name()).collect()
}
