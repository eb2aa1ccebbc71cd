/// Generates a getter/setter pair for a named 16-bit register field.
///
/// The receiver must provide `read_word` and `write_word`.
macro_rules! impl_word_field {
    ($name:ident, $hi:ident, $lo:ident) => {
        paste::paste! {
            #[doc = "Reads the `" $name "` word (`" $hi "`/`" $lo "`)."]
            #[inline]
            pub fn $name(&self) -> u16 {
                self.read_word(crate::registers::map::$hi, crate::registers::map::$lo)
            }

            #[doc = "Writes the `" $name "` word (`" $hi "`/`" $lo "`)."]
            #[doc = ""]
            #[doc = "Firmware-side write: bypasses the access policy."]
            #[inline]
            pub fn [<set_ $name>](&self, value: u16) {
                self.write_word(crate::registers::map::$hi, crate::registers::map::$lo, value)
            }
        }
    };
}

/// Generates a getter/setter pair for a named single byte register.
macro_rules! impl_byte_field {
    ($name:ident, $reg:ident) => {
        paste::paste! {
            #[doc = "Reads the `" $name "` register (`" $reg "`)."]
            #[inline]
            pub fn $name(&self) -> u8 {
                self.read_byte(crate::registers::map::$reg)
            }

            #[doc = "Writes the `" $name "` register (`" $reg "`)."]
            #[doc = ""]
            #[doc = "Firmware-side write: bypasses the access policy."]
            #[inline]
            pub fn [<set_ $name>](&self, value: u8) {
                self.write_byte(crate::registers::map::$reg, value)
            }
        }
    };
}

/// Generates accessors for every named field of the register map.
macro_rules! impl_register_fields {
    () => {
        impl_byte_field!(device_type, REG_DEVICE_TYPE);
        impl_byte_field!(device_subtype, REG_DEVICE_SUBTYPE);
        impl_byte_field!(version_major, REG_VERSION_MAJOR);
        impl_byte_field!(version_minor, REG_VERSION_MINOR);
        impl_word_field!(timer, REG_TIMER_HI, REG_TIMER_LO);
        impl_word_field!(position, REG_POSITION_HI, REG_POSITION_LO);
        impl_word_field!(velocity, REG_VELOCITY_HI, REG_VELOCITY_LO);
        impl_word_field!(power, REG_POWER_HI, REG_POWER_LO);
        impl_byte_field!(pwm_cw, REG_PWM_CW);
        impl_byte_field!(pwm_ccw, REG_PWM_CCW);

        impl_word_field!(seek, REG_SEEK_HI, REG_SEEK_LO);
        impl_byte_field!(maximum_pwm, REG_MAXIMUM_PWM);

        impl_byte_field!(bus_address, REG_BUS_ADDRESS);
        impl_word_field!(pid_pgain, REG_PID_PGAIN_HI, REG_PID_PGAIN_LO);
        impl_word_field!(pid_dgain, REG_PID_DGAIN_HI, REG_PID_DGAIN_LO);
        impl_word_field!(pid_igain, REG_PID_IGAIN_HI, REG_PID_IGAIN_LO);
        impl_word_field!(min_seek, REG_MIN_SEEK_HI, REG_MIN_SEEK_LO);
        impl_word_field!(max_seek, REG_MAX_SEEK_HI, REG_MAX_SEEK_LO);
        impl_byte_field!(reverse_seek, REG_REVERSE_SEEK);
    };
}

pub(crate) use impl_byte_field;
pub(crate) use impl_register_fields;
pub(crate) use impl_word_field;
