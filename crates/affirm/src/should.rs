//! Entry points: `value.should()` and the `that*` functions.

use crate::boolean::BooleanAssertions;
use crate::guid::GuidAssertions;
use crate::object::ObjectAssertions;
use crate::reference::ReferenceAssertions;
use crate::string::StringAssertions;
use crate::temporal::TemporalAssertions;
use crate::variant::EnumAssertions;
use std::any::Any;
use std::fmt::Debug;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Start a chain of assertions on a value whose kind has dedicated checks.
pub trait Should {
    type Assertions<'a>
    where
        Self: 'a;

    fn should(&self) -> Self::Assertions<'_>;
}

impl Should for bool {
    type Assertions<'a> = BooleanAssertions;

    fn should(&self) -> BooleanAssertions {
        BooleanAssertions::new(Some(*self))
    }
}

impl Should for Option<bool> {
    type Assertions<'a> = BooleanAssertions;

    fn should(&self) -> BooleanAssertions {
        BooleanAssertions::new(*self)
    }
}

impl Should for Uuid {
    type Assertions<'a> = GuidAssertions;

    fn should(&self) -> GuidAssertions {
        GuidAssertions::new(Some(*self))
    }
}

impl Should for Option<Uuid> {
    type Assertions<'a> = GuidAssertions;

    fn should(&self) -> GuidAssertions {
        GuidAssertions::new(*self)
    }
}

impl Should for str {
    type Assertions<'a> = StringAssertions<'a>;

    fn should(&self) -> StringAssertions<'_> {
        StringAssertions::new(Some(self))
    }
}

impl Should for String {
    type Assertions<'a> = StringAssertions<'a>;

    fn should(&self) -> StringAssertions<'_> {
        StringAssertions::new(Some(self.as_str()))
    }
}

impl<'s> Should for Option<&'s str> {
    type Assertions<'a>
        = StringAssertions<'a>
    where
        Self: 'a;

    fn should(&self) -> StringAssertions<'_> {
        StringAssertions::new(*self)
    }
}

impl Should for Option<String> {
    type Assertions<'a> = StringAssertions<'a>;

    fn should(&self) -> StringAssertions<'_> {
        StringAssertions::new(self.as_deref())
    }
}

macro_rules! temporal_should {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Should for $ty {
                type Assertions<'a> = TemporalAssertions<$ty>;

                fn should(&self) -> TemporalAssertions<$ty> {
                    TemporalAssertions::new(Some(*self))
                }
            }

            impl Should for Option<$ty> {
                type Assertions<'a> = TemporalAssertions<$ty>;

                fn should(&self) -> TemporalAssertions<$ty> {
                    TemporalAssertions::new(*self)
                }
            }
        )*
    };
}

temporal_should!(Date, Time, PrimitiveDateTime, OffsetDateTime);

/// Assertions on any `Debug` value.
#[must_use]
pub fn that<T: Debug + ?Sized>(subject: &T) -> ObjectAssertions<'_, T> {
    ObjectAssertions::new(Some(subject))
}

/// Like [`that`], for a value that may be absent.
#[must_use]
pub fn that_opt<T: Debug + ?Sized>(subject: Option<&T>) -> ObjectAssertions<'_, T> {
    ObjectAssertions::new(subject)
}

#[must_use]
pub fn that_enum<E: Debug>(subject: &E) -> EnumAssertions<'_, E> {
    EnumAssertions::new(Some(subject))
}

/// Identity and runtime type checks; the static type name is kept for
/// failure messages.
#[must_use]
pub fn that_ref<T: Any>(subject: &T) -> ReferenceAssertions<'_> {
    ReferenceAssertions::new(Some(subject))
}

#[must_use]
pub fn that_any(subject: &dyn Any) -> ReferenceAssertions<'_> {
    ReferenceAssertions::from_any(Some(subject))
}
