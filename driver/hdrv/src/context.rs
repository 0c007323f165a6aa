//! AP 上下文
//!
//! 每个受管接口一个 [`HostapdData`]：静态配置 + 驱动绑定 + 驱动私有句柄。
//! 上下文只在一条生命周期序列（启动、运行时重配、拆除）内按序使用，不加锁。

use alloc::string::String;
use alloc::vec::Vec;

use axerrno::{AxError, AxResult};
use ieee80211::MacAddr;

use crate::ops::{DriverOps, DrvPriv};

/// SSID 最大长度
pub const SSID_MAX_LEN: usize = 32;

/// 单个 BSS 的配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BssConfig {
    /// 接口名（如 wlan0、wlan0_1）
    pub iface: String,
    /// 网桥名；空串表示不接网桥
    pub bridge: String,
    pub ssid: Vec<u8>,
    pub test_socket: Option<String>,
    pub use_pae_group_addr: bool,
    /// 指定 BSSID；None 时由驱动决定
    pub bssid: Option<MacAddr>,
}

impl BssConfig {
    pub fn new(iface: &str) -> Self {
        Self {
            iface: String::from(iface),
            ..Default::default()
        }
    }

    pub fn with_bridge(mut self, bridge: &str) -> Self {
        self.bridge = String::from(bridge);
        self
    }

    pub fn with_ssid(mut self, ssid: &[u8]) -> Self {
        self.ssid = ssid.to_vec();
        self
    }

    pub fn with_test_socket(mut self, path: &str) -> Self {
        self.test_socket = Some(String::from(path));
        self
    }

    pub fn with_pae_group_addr(mut self, enabled: bool) -> Self {
        self.use_pae_group_addr = enabled;
        self
    }

    pub fn with_bssid(mut self, bssid: MacAddr) -> Self {
        self.bssid = Some(bssid);
        self
    }

    /// 网桥名，未配置时为 None
    pub fn bridge(&self) -> Option<&str> {
        if self.bridge.is_empty() {
            None
        } else {
            Some(self.bridge.as_str())
        }
    }
}

/// 共享同一物理接口的全部 BSS，按 BSS 序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostapdIface {
    pub bss: Vec<BssConfig>,
}

impl HostapdIface {
    pub fn new(bss: Vec<BssConfig>) -> Self {
        Self { bss }
    }

    pub fn num_bss(&self) -> usize {
        self.bss.len()
    }
}

/// 上下文的静态配置部分
#[derive(Debug, Clone)]
pub struct ApConf {
    iface: HostapdIface,
    bss_idx: usize,
    own_addr: MacAddr,
}

impl ApConf {
    /// 本 BSS 的配置
    pub fn conf(&self) -> &BssConfig {
        &self.iface.bss[self.bss_idx]
    }

    pub fn iface(&self) -> &HostapdIface {
        &self.iface
    }

    pub fn bss_idx(&self) -> usize {
        self.bss_idx
    }

    pub fn own_addr(&self) -> &MacAddr {
        &self.own_addr
    }
}

/// AP 上下文：至多一个驱动绑定与一个驱动私有句柄
pub struct HostapdData {
    pub(crate) conf: ApConf,
    pub(crate) driver: Option<&'static dyn DriverOps>,
    pub(crate) drv_priv: DrvPriv,
}

impl HostapdData {
    /// 为 `iface.bss[bss_idx]` 创建上下文；初始未绑定驱动、句柄为空。
    ///
    /// `bss_idx` 越界（含 BSS 列表为空）返回 `AxError::InvalidInput`。
    pub fn new(iface: HostapdIface, bss_idx: usize, own_addr: MacAddr) -> AxResult<Self> {
        if bss_idx >= iface.num_bss() {
            log::warn!(
                target: "hostap::hdrv",
                "bss index {} out of range ({} BSS)",
                bss_idx,
                iface.num_bss()
            );
            return Err(AxError::InvalidInput);
        }
        Ok(Self {
            conf: ApConf {
                iface,
                bss_idx,
                own_addr,
            },
            driver: None,
            drv_priv: DrvPriv::empty(),
        })
    }

    /// 单 BSS 接口
    pub fn single(conf: BssConfig, own_addr: MacAddr) -> Self {
        Self {
            conf: ApConf {
                iface: HostapdIface::new(alloc::vec![conf]),
                bss_idx: 0,
                own_addr,
            },
            driver: None,
            drv_priv: DrvPriv::empty(),
        }
    }

    pub fn conf(&self) -> &BssConfig {
        self.conf.conf()
    }

    pub fn ap_conf(&self) -> &ApConf {
        &self.conf
    }

    pub fn own_addr(&self) -> &MacAddr {
        self.conf.own_addr()
    }

    pub fn driver(&self) -> Option<&'static dyn DriverOps> {
        self.driver
    }

    /// 绑定驱动，返回之前绑定的驱动。句柄不变
    pub fn bind_driver(&mut self, driver: &'static dyn DriverOps) -> Option<&'static dyn DriverOps> {
        log::debug!(target: "hostap::hdrv", "{}: bind driver {}", self.conf().iface, driver.name());
        self.driver.replace(driver)
    }

    pub fn unbind_driver(&mut self) -> Option<&'static dyn DriverOps> {
        self.driver.take()
    }

    pub fn drv_priv(&self) -> &DrvPriv {
        &self.drv_priv
    }

    pub fn drv_priv_mut(&mut self) -> &mut DrvPriv {
        &mut self.drv_priv
    }

    /// 保存 driver_init 得到的句柄
    pub fn set_drv_priv(&mut self, drv_priv: DrvPriv) {
        self.drv_priv = drv_priv;
    }

    pub fn take_drv_priv(&mut self) -> DrvPriv {
        core::mem::take(&mut self.drv_priv)
    }
}

impl core::fmt::Debug for HostapdData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HostapdData")
            .field("conf", &self.conf)
            .field("driver", &self.driver.map(|d| d.name()))
            .field("drv_priv", &self.drv_priv)
            .finish()
    }
}
