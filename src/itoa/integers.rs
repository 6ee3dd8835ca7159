use crate::constants::*;
use crate::tables::*;

macro_rules! impl_Integer {
    ($($max_len:expr => $t:ident via $tables:ident, $global:ident);* $(;)?) => {$(
        impl crate::private::Sealed for $t {}

        impl super::Integer for $t {
            type Tables = $tables;

            const MAX_LEN: usize = $max_len;

            #[inline]
            fn write_with<'a>(self, tables: &Self::Tables, buf: &'a mut [u8]) -> &'a str {
                tables.convert(self as u64, buf)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn tables() -> &'static Self::Tables {
                &$global
            }
        }
    )*};
}

impl_Integer!(
    U8_MAX_LEN => u8 via Tables8, TABLES8;
    U16_MAX_LEN => u16 via Tables16, TABLES16;
    U32_MAX_LEN => u32 via Tables32, TABLES32;
    U64_MAX_LEN => u64 via Tables64, TABLES64;
);

#[cfg(target_pointer_width = "16")]
impl_Integer!(U16_MAX_LEN => usize via Tables16, TABLES16);

#[cfg(target_pointer_width = "32")]
impl_Integer!(U32_MAX_LEN => usize via Tables32, TABLES32);

#[cfg(target_pointer_width = "64")]
impl_Integer!(U64_MAX_LEN => usize via Tables64, TABLES64);
