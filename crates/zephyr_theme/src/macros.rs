/// Declare the partial-override companion of a color table.
///
/// Every slot becomes an `Option<Color>`; `with_overrides` copies each slot
/// from the override when present and from `self` otherwise.
macro_rules! color_overrides {
    (
        $(#[$meta:meta])*
        $name:ident for $colors:ident { $($slot:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $slot: Option<zephyr_core::Color>,
            )+
        }

        impl $name {
            /// True when no slot is overridden
            pub fn is_empty(&self) -> bool {
                true $(&& self.$slot.is_none())+
            }
        }

        impl $colors {
            /// Copy of `self` with every slot set in `overrides` replaced
            pub fn with_overrides(&self, overrides: &$name) -> Self {
                Self {
                    $($slot: overrides.$slot.unwrap_or(self.$slot),)+
                }
            }
        }
    };
}
