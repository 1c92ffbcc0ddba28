use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

/// Bitset of line metadata options.
///
/// Bit values are the ones used by the classic `log`-package line layout, so a
/// mask written down elsewhere keeps its meaning here.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatFlags(u32);

impl FormatFlags {
    /// Local date: `2009/01/23`.
    pub const DATE: Self = Self(1);
    /// Local time: `01:23:23`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Caller path and line, with the path exactly as recorded by the compiler
    /// (`file!()`), which for workspace crates is relative: `app/src/main.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final path segment and line: `main.rs:23`.
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Render date and time in UTC instead of the local zone.
    pub const UTC: Self = Self(1 << 5);
    /// Move the level prefix from the start of the line to just before the message.
    pub const MSG_PREFIX: Self = Self(1 << 6);
    /// `DATE | TIME`.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    pub const NONE: Self = Self(0);

    /// Flags used when a logger is built with an empty flag list.
    pub const DEFAULT: Self = Self(Self::DATE.0 | Self::TIME.0 | Self::MSG_PREFIX.0);

    const NAMED: [(Self, &'static str); 7] = [
        (Self::DATE, "DATE"),
        (Self::TIME, "TIME"),
        (Self::MICROSECONDS, "MICROSECONDS"),
        (Self::LONG_FILE, "LONG_FILE"),
        (Self::SHORT_FILE, "SHORT_FILE"),
        (Self::UTC, "UTC"),
        (Self::MSG_PREFIX, "MSG_PREFIX"),
    ];

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when either caller-path flag is set.
    pub const fn with_caller(self) -> bool {
        self.intersects(Self(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }

    /// ORs a list of flags together; an empty list yields [`FormatFlags::DEFAULT`].
    pub fn from_list(flags: &[FormatFlags]) -> Self {
        if flags.is_empty() {
            return Self::DEFAULT;
        }
        let mut all = Self::NONE;
        for flag in flags {
            all |= *flag;
        }
        all
    }
}

impl BitOr for FormatFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        if *self == Self::STD {
            return f.write_str("STD");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormatFlags({self})")
    }
}
