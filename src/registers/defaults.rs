//! Identity and nominal operating values applied by the bank lifecycle.

/// Values stamped by [`RegisterBank::init`](crate::registers::RegisterBank::init)
/// and written by [`RegisterBank::load_defaults`](crate::registers::RegisterBank::load_defaults).
///
/// Build one with [`Defaults::new`] and override individual values:
///
/// ```
/// use servo_registers::registers::Defaults;
///
/// const DEFAULTS: Defaults = Defaults::new()
///     .with_bus_address(0x22)
///     .with_seek_limits(0x0080, 0x0380);
///
/// assert_eq!(DEFAULTS.bus_address, 0x22);
/// assert_eq!(DEFAULTS.seek, 0x0200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub device_type: u8,
    pub device_subtype: u8,
    pub version_major: u8,
    pub version_minor: u8,
    /// Seek target, mid-range.
    pub seek: u16,
    pub maximum_pwm: u8,
    pub bus_address: u8,
    pub pid_pgain: u16,
    pub pid_dgain: u16,
    pub pid_igain: u16,
    pub min_seek: u16,
    pub max_seek: u16,
    pub reverse_seek: bool,
    /// Whether `load_defaults` leaves PWM output enabled.
    pub pwm_enabled: bool,
}

impl Defaults {
    pub const fn new() -> Self {
        Self {
            device_type: 0x01,
            device_subtype: 0x01,
            version_major: 0x00,
            version_minor: 0x02,
            seek: 0x0200,
            maximum_pwm: 0xFF,
            bus_address: 0x10,
            pid_pgain: 0x0600,
            pid_dgain: 0x0C00,
            pid_igain: 0x0000,
            min_seek: 0x0060,
            max_seek: 0x03A0,
            reverse_seek: false,
            pwm_enabled: true,
        }
    }

    pub const fn with_identity(mut self, device_type: u8, device_subtype: u8) -> Self {
        self.device_type = device_type;
        self.device_subtype = device_subtype;
        self
    }

    pub const fn with_version(mut self, major: u8, minor: u8) -> Self {
        self.version_major = major;
        self.version_minor = minor;
        self
    }

    pub const fn with_seek(mut self, seek: u16) -> Self {
        self.seek = seek;
        self
    }

    pub const fn with_maximum_pwm(mut self, maximum_pwm: u8) -> Self {
        self.maximum_pwm = maximum_pwm;
        self
    }

    pub const fn with_bus_address(mut self, bus_address: u8) -> Self {
        self.bus_address = bus_address;
        self
    }

    pub const fn with_pid_gains(mut self, pgain: u16, dgain: u16, igain: u16) -> Self {
        self.pid_pgain = pgain;
        self.pid_dgain = dgain;
        self.pid_igain = igain;
        self
    }

    pub const fn with_seek_limits(mut self, min_seek: u16, max_seek: u16) -> Self {
        self.min_seek = min_seek;
        self.max_seek = max_seek;
        self
    }

    pub const fn with_reverse_seek(mut self, reverse_seek: bool) -> Self {
        self.reverse_seek = reverse_seek;
        self
    }

    pub const fn with_pwm_enabled(mut self, pwm_enabled: bool) -> Self {
        self.pwm_enabled = pwm_enabled;
        self
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new()
    }
}
