//! Declarative schema definitions.
//!
//! `element_schema!` turns one field list into the attribute table, the
//! child dispatch table, the text slot and the `IsEmpty` impl of a type,
//! so the four can never disagree about which fields exist.
//!
//! ```text
//! element_schema!(Cd {
//!     attributes: [
//!         "code" => text code,
//!         @sdtc "valueSet" => text value_set,
//!     ],
//!     children: [
//!         v3 "originalText" => one original_text: Ed,
//!         v3 "translation" => many translations: Cd,
//!         v3 "useablePeriod" => timing useable_periods,
//!     ],
//!     text: text,
//! });
//! ```
//!
//! Attribute kinds are `text`, `flag`, `integer`, `decimal` and `tokens`.
//! Child modes are `one` (last match wins), `boxed`, `many` (appends when
//! the child decodes to something), `timing` (top-level timing resolution)
//! and `member` (composite member resolution).

macro_rules! element_schema {
    (@name sdtc $local:literal) => {
        $crate::registry::AttrName::qualified($crate::config::SDTC_NAMESPACE, $local)
    };
    (@name $local:literal) => {
        $crate::registry::AttrName::plain($local)
    };

    (@ns v3) => {
        $crate::config::HL7_NAMESPACE
    };
    (@ns sdtc) => {
        $crate::config::SDTC_NAMESPACE
    };

    (@slot $ty:ident, text, $field:ident) => {
        $crate::registry::Slot::Text({
            fn access(v: &mut $ty) -> &mut Option<String> {
                &mut v.$field
            }
            access
        })
    };
    (@slot $ty:ident, flag, $field:ident) => {
        $crate::registry::Slot::Flag({
            fn access(v: &mut $ty) -> &mut Option<bool> {
                &mut v.$field
            }
            access
        })
    };
    (@slot $ty:ident, integer, $field:ident) => {
        $crate::registry::Slot::Integer({
            fn access(v: &mut $ty) -> &mut Option<i64> {
                &mut v.$field
            }
            access
        })
    };
    (@slot $ty:ident, decimal, $field:ident) => {
        $crate::registry::Slot::Decimal({
            fn access(v: &mut $ty) -> &mut Option<f64> {
                &mut v.$field
            }
            access
        })
    };
    (@slot $ty:ident, tokens, $field:ident) => {
        $crate::registry::Slot::Tokens({
            fn access(v: &mut $ty) -> &mut Vec<String> {
                &mut v.$field
            }
            access
        })
    };

    (@child $ty:ident, one, $field:ident, $dec:ty) => {{
        fn slot(
            target: &mut $ty,
            node: ::roxmltree::Node<'_, '_>,
            ctx: &mut $crate::registry::DecodeContext,
        ) -> $crate::error::Result<()> {
            target.$field = <$dec as $crate::registry::Decode>::decode(node, ctx)?;
            Ok(())
        }
        slot as $crate::registry::ChildSlot<$ty>
    }};
    (@child $ty:ident, boxed, $field:ident, $dec:ty) => {{
        fn slot(
            target: &mut $ty,
            node: ::roxmltree::Node<'_, '_>,
            ctx: &mut $crate::registry::DecodeContext,
        ) -> $crate::error::Result<()> {
            target.$field = <$dec as $crate::registry::Decode>::decode(node, ctx)?.map(Box::new);
            Ok(())
        }
        slot as $crate::registry::ChildSlot<$ty>
    }};
    (@child $ty:ident, many, $field:ident, $dec:ty) => {{
        fn slot(
            target: &mut $ty,
            node: ::roxmltree::Node<'_, '_>,
            ctx: &mut $crate::registry::DecodeContext,
        ) -> $crate::error::Result<()> {
            if let Some(value) = <$dec as $crate::registry::Decode>::decode(node, ctx)? {
                target.$field.push(value);
            }
            Ok(())
        }
        slot as $crate::registry::ChildSlot<$ty>
    }};
    (@child $ty:ident, timing, $field:ident) => {{
        fn slot(
            target: &mut $ty,
            node: ::roxmltree::Node<'_, '_>,
            ctx: &mut $crate::registry::DecodeContext,
        ) -> $crate::error::Result<()> {
            if let Some(value) = $crate::registry::resolve_timing(node, ctx)? {
                target.$field.push(value);
            }
            Ok(())
        }
        slot as $crate::registry::ChildSlot<$ty>
    }};
    (@child $ty:ident, member, $field:ident) => {{
        fn slot(
            target: &mut $ty,
            node: ::roxmltree::Node<'_, '_>,
            ctx: &mut $crate::registry::DecodeContext,
        ) -> $crate::error::Result<()> {
            if let Some(value) = $crate::registry::resolve_member(node, ctx)? {
                target.$field.push(value);
            }
            Ok(())
        }
        slot as $crate::registry::ChildSlot<$ty>
    }};

    (
        $ty:ident {
            attributes: [
                $( $(@$ans:ident)? $aname:literal => $akind:ident $afield:ident ),* $(,)?
            ],
            children: [
                $( $cns:ident $cname:literal => $cmode:ident $cfield:ident $(: $cdec:ty)? ),* $(,)?
            ],
            $( text: $tfield:ident, )?
        }
    ) => {
        impl $crate::registry::ElementSchema for $ty {
            fn attributes() -> &'static [$crate::registry::AttributeSpec<Self>] {
                static ATTRIBUTES: &[$crate::registry::AttributeSpec<$ty>] = &[
                    $(
                        $crate::registry::AttributeSpec {
                            name: element_schema!(@name $($ans)? $aname),
                            slot: element_schema!(@slot $ty, $akind, $afield),
                        },
                    )*
                ];
                ATTRIBUTES
            }

            fn children() -> &'static $crate::registry::DispatchTable<Self> {
                static CHILDREN: ::std::sync::LazyLock<$crate::registry::DispatchTable<$ty>> =
                    ::std::sync::LazyLock::new(|| {
                        #[allow(unused_mut)]
                        let mut table = $crate::registry::DispatchTable::new();
                        $(
                            table.register(
                                element_schema!(@ns $cns),
                                $cname,
                                element_schema!(@child $ty, $cmode, $cfield $(, $cdec)?),
                            );
                        )*
                        table
                    });
                &CHILDREN
            }

            $(
                fn text_slot(&mut self) -> Option<&mut Option<String>> {
                    Some(&mut self.$tfield)
                }
            )?
        }

        impl $crate::emptiness::IsEmpty for $ty {
            #[allow(clippy::nonminimal_bool)]
            fn is_empty(&self) -> bool {
                true
                    $( && $crate::emptiness::IsEmpty::is_empty(&self.$afield) )*
                    $( && $crate::emptiness::IsEmpty::is_empty(&self.$cfield) )*
                    $( && $crate::emptiness::IsEmpty::is_empty(&self.$tfield) )?
            }
        }
    };
}
