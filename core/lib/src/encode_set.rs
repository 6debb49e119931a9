//! The registry of percent-encode sets.
//!
//! Every URL sub-context shares one baseline of characters that are never
//! safe to emit bare; each named context then escapes a short list of extra
//! printable characters on top of it. The resolved sets are `AsciiSet`
//! constants, the same representation the `percent-encoding` crate expects,
//! so they can be handed straight to [`percent_encoding::percent_encode`].

use percent_encoding::{AsciiSet, CONTROLS};

/// Escaped in every context: C0 controls and DEL (via [`CONTROLS`]) plus the
/// printable characters no context may emit bare. Bytes outside ASCII are not
/// representable in an `AsciiSet`; the table builder escapes them
/// unconditionally, matching `percent-encoding`'s own behavior.
pub const BASE: AsciiSet = CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`');

const SIMPLE_EXTRAS: &[u8] = b"";
const QUERY_EXTRAS: &[u8] = b"'";
const DEFAULT_EXTRAS: &[u8] = b"?{}";
const USERINFO_EXTRAS: &[u8] = b"?{}@";
const PASSWORD_EXTRAS: &[u8] = b"?{}@\\/";
const USERNAME_EXTRAS: &[u8] = b"?{}@\\/:";
const FORM_URLENCODED_EXTRAS: &[u8] = b"!$&'()+,/:;<=>?@[\\]^{|}~";
const HTTP_VALUE_EXTRAS: &[u8] = b"%'()*,/:;<->?[\\]{}";
const UNRESERVED_EXTRAS: &[u8] = b"!$&'*()+,/:;<=>?@[\\]^{|}";

/// Folds an extras list over [`BASE`].
///
/// A malformed list is a defect in the literal data above, so it fails const
/// evaluation rather than surfacing at run time: every extra must be
/// printable ASCII and may appear only once per list. Overlap with `BASE`
/// itself is permitted; `AsciiSet::add` is idempotent and some historical
/// lists restate baseline members.
const fn with_extras(extras: &[u8]) -> AsciiSet {
    let mut set = BASE;
    let mut i = 0;
    while i < extras.len() {
        let c = extras[i];
        assert!(0x20 <= c && c <= 0x7E, "encode set extra outside printable ASCII");

        let mut j = 0;
        while j < i {
            assert!(extras[j] != c, "encode set extra listed twice");
            j += 1;
        }

        set = set.add(c);
        i += 1;
    }
    set
}

/// Baseline only.
pub const SIMPLE: AsciiSet = with_extras(SIMPLE_EXTRAS);

/// Query strings additionally escape `'`.
pub const QUERY: AsciiSet = with_extras(QUERY_EXTRAS);

/// The default set for path-like components: `?` and curly braces.
pub const DEFAULT: AsciiSet = with_extras(DEFAULT_EXTRAS);

/// Userinfo: [`DEFAULT`] plus `@`.
pub const USERINFO: AsciiSet = with_extras(USERINFO_EXTRAS);

/// Passwords: [`USERINFO`] plus `\` and `/`.
pub const PASSWORD: AsciiSet = with_extras(PASSWORD_EXTRAS);

/// Usernames: [`PASSWORD`] plus `:`.
pub const USERNAME: AsciiSet = with_extras(USERNAME_EXTRAS);

/// `application/x-www-form-urlencoded` bodies.
pub const FORM_URLENCODED: AsciiSet = with_extras(FORM_URLENCODED_EXTRAS);

/// Generic HTTP header values. Note that the list spells out `<`, `-`, `>`:
/// the hyphen is a member.
pub const HTTP_VALUE: AsciiSet = with_extras(HTTP_VALUE_EXTRAS);

/// Everything except the RFC 3986 unreserved characters.
pub const UNRESERVED: AsciiSet = with_extras(UNRESERVED_EXTRAS);

/// `AsciiSet` membership through the crate's public surface: `add` is a
/// no-op exactly when the byte is already a member. The upstream inherent
/// `contains` is `pub(crate)` in released `percent-encoding` versions, so
/// this trait supplies the method the rest of the crate calls. Like the
/// upstream method, it is only meaningful for ASCII bytes.
pub(crate) trait AsciiSetExt {
    fn contains(&self, byte: u8) -> bool;
}

impl AsciiSetExt for AsciiSet {
    fn contains(&self, byte: u8) -> bool {
        &self.add(byte) == self
    }
}

/// A named URL sub-context with a fixed escape set.
///
/// The set of contexts is closed: adding one is a change to this crate, not
/// something callers do at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Simple,
    Query,
    Default,
    Userinfo,
    Password,
    Username,
    FormUrlencoded,
    HttpValue,
    Unreserved,
}

impl Context {
    /// Every context, in registry order. This is also the order the
    /// generated source lists the tables in.
    pub const ALL: [Context; 9] = [
        Context::Simple,
        Context::Query,
        Context::Default,
        Context::Userinfo,
        Context::Password,
        Context::Username,
        Context::FormUrlencoded,
        Context::HttpValue,
        Context::Unreserved,
    ];

    /// The constant name used for this context's table in generated source.
    pub const fn name(self) -> &'static str {
        match self {
            Context::Simple => "SIMPLE",
            Context::Query => "QUERY",
            Context::Default => "DEFAULT",
            Context::Userinfo => "USERINFO",
            Context::Password => "PASSWORD",
            Context::Username => "USERNAME",
            Context::FormUrlencoded => "FORM_URLENCODED",
            Context::HttpValue => "HTTP_VALUE",
            Context::Unreserved => "UNRESERVED",
        }
    }

    /// The printable characters this context escapes beyond [`BASE`].
    pub const fn extras(self) -> &'static [u8] {
        match self {
            Context::Simple => SIMPLE_EXTRAS,
            Context::Query => QUERY_EXTRAS,
            Context::Default => DEFAULT_EXTRAS,
            Context::Userinfo => USERINFO_EXTRAS,
            Context::Password => PASSWORD_EXTRAS,
            Context::Username => USERNAME_EXTRAS,
            Context::FormUrlencoded => FORM_URLENCODED_EXTRAS,
            Context::HttpValue => HTTP_VALUE_EXTRAS,
            Context::Unreserved => UNRESERVED_EXTRAS,
        }
    }

    /// The fully resolved escape set: baseline plus this context's extras.
    pub fn ascii_set(self) -> &'static AsciiSet {
        match self {
            Context::Simple => &SIMPLE,
            Context::Query => &QUERY,
            Context::Default => &DEFAULT,
            Context::Userinfo => &USERINFO,
            Context::Password => &PASSWORD,
            Context::Username => &USERNAME,
            Context::FormUrlencoded => &FORM_URLENCODED,
            Context::HttpValue => &HTTP_VALUE,
            Context::Unreserved => &UNRESERVED,
        }
    }
}
