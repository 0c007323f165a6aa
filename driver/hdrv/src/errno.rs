//! 驱动边界上使用的负 errno 值

pub const EIO: i32 = -5;
pub const EBUSY: i32 = -16;
pub const ENODEV: i32 = -19;
pub const EINVAL: i32 = -22;
