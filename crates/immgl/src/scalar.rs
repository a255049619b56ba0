//! Numeric adapters for the legacy per-width overloads.
//!
//! The legacy API has one entry point per source width (`b`, `s`, `i`, `f`,
//! `d`, `ub`, `us`, `ui`). Internally everything is single precision; these
//! traits are the one place where each width is converted.

/// Floating-point input (`f` and `d` flavors). Stored as `f32`.
pub trait Real: Copy {
    fn to_f32(self) -> f32;
}

impl Real for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

impl Real for f64 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

/// Color channel input.
///
/// Floating channels are taken as already normalized. Integer channels of
/// every width are divided by 255.
pub trait ColorChannel: Copy {
    fn to_channel(self) -> f32;
}

impl ColorChannel for f32 {
    #[inline]
    fn to_channel(self) -> f32 {
        self
    }
}

impl ColorChannel for f64 {
    #[inline]
    fn to_channel(self) -> f32 {
        self as f32
    }
}

macro_rules! int_color_channel {
    ($($t:ty),*) => {
        $(
            impl ColorChannel for $t {
                #[inline]
                fn to_channel(self) -> f32 {
                    self as f32 / 255.0
                }
            }
        )*
    };
}

int_color_channel!(i8, u8, i16, u16, i32, u32);

/// Normal component input. Every width is cast to `f32` with no rescaling.
pub trait NormalComponent: Copy {
    fn to_component(self) -> f32;
}

macro_rules! normal_component {
    ($($t:ty),*) => {
        $(
            impl NormalComponent for $t {
                #[inline]
                fn to_component(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

normal_component!(i8, i16, i32, f32, f64);

/// Integer vertex component (`s` and `i` flavors).
///
/// Integer positions only reach the scratch registers; they never produce a
/// vertex record.
pub trait VertexInt: Copy {
    fn to_i32(self) -> i32;
}

impl VertexInt for i16 {
    #[inline]
    fn to_i32(self) -> i32 {
        i32::from(self)
    }
}

impl VertexInt for i32 {
    #[inline]
    fn to_i32(self) -> i32 {
        self
    }
}
