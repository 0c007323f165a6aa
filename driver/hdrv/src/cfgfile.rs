//! 接口配置文本解析
//!
//! 解析 `key=value` 行格式的 AP 配置，得到一个物理接口上的全部 BSS：
//! `interface=` 设置当前 BSS 的接口名，`bss=` 开始一个新 BSS，其后的键都作用于它。
//! `#` 开头的行与空行忽略；未识别的键记日志后忽略。

use alloc::string::String;

use axerrno::{AxError, AxResult};
use ieee80211::{MacAddr, ETH_ALEN};

use crate::context::{BssConfig, HostapdIface, SSID_MAX_LEN};

/// 解析 00:11:22:33:44:55 格式（冒号可省略）
pub fn parse_mac_addr(s: &str) -> Option<MacAddr> {
    let s = s.as_bytes();
    let mut out = [0u8; ETH_ALEN];
    let mut i = 0;
    let mut byte_idx = 0;
    while byte_idx < ETH_ALEN && i + 2 <= s.len() {
        let hi = hex_nibble(s[i])?;
        let lo = hex_nibble(s[i + 1])?;
        out[byte_idx] = (hi << 4) | lo;
        byte_idx += 1;
        i += 2;
        if byte_idx < ETH_ALEN && i < s.len() && s[i] == b':' {
            i += 1;
        }
    }
    if byte_idx == ETH_ALEN && i == s.len() {
        Some(out)
    } else {
        None
    }
}

fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn parse_flag(line: usize, value: &str) -> AxResult<bool> {
    match value.parse::<i32>() {
        Ok(v) => Ok(v != 0),
        Err(_) => {
            log::warn!(target: "hostap::hdrv", "line {}: invalid number '{}'", line, value);
            Err(AxError::InvalidInput)
        }
    }
}

/// 解析配置文本。
///
/// 行格式错误、SSID 长度不在 1..=32、BSSID 格式错误或有 BSS 缺少接口名时返回
/// `AxError::InvalidInput`。
pub fn parse_config(text: &str) -> AxResult<HostapdIface> {
    let mut iface = HostapdIface::new(alloc::vec![BssConfig::default()]);

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let raw = raw.trim();
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        let Some((key, value)) = raw.split_once('=') else {
            log::warn!(target: "hostap::hdrv", "line {}: invalid line '{}'", line, raw);
            return Err(AxError::InvalidInput);
        };

        if key == "bss" {
            iface.bss.push(BssConfig::new(value));
            continue;
        }
        let Some(bss) = iface.bss.last_mut() else {
            return Err(AxError::InvalidInput);
        };
        match key {
            "interface" => bss.iface = String::from(value),
            "bridge" => bss.bridge = String::from(value),
            "ssid" => {
                if value.is_empty() || value.len() > SSID_MAX_LEN {
                    log::warn!(target: "hostap::hdrv", "line {}: invalid SSID '{}'", line, value);
                    return Err(AxError::InvalidInput);
                }
                bss.ssid = value.as_bytes().to_vec();
            }
            "test_socket" => bss.test_socket = Some(String::from(value)),
            "use_pae_group_addr" => bss.use_pae_group_addr = parse_flag(line, value)?,
            "bssid" => {
                let Some(addr) = parse_mac_addr(value) else {
                    log::warn!(target: "hostap::hdrv", "line {}: invalid bssid '{}'", line, value);
                    return Err(AxError::InvalidInput);
                };
                bss.bssid = Some(addr);
            }
            _ => log::debug!(target: "hostap::hdrv", "line {}: ignore unknown item '{}'", line, key),
        }
    }

    if let Some(pos) = iface.bss.iter().position(|b| b.iface.is_empty()) {
        log::warn!(target: "hostap::hdrv", "BSS #{} has no interface name", pos);
        return Err(AxError::InvalidInput);
    }
    Ok(iface)
}
