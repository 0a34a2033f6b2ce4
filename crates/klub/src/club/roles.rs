//! Role policy: display labels, badge styles, and capability allow-lists.
//!
//! Capabilities are modeled as data. Every allow-list names `admin`
//! explicitly; a capability whose list omits admins is a bug, and a test
//! pins that down.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The fixed set of club roles. Wire identifiers match the backend exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "clan")]
    Clan,
    #[serde(rename = "vodic")]
    Vodic,
    #[serde(rename = "blagajnik")]
    Blagajnik,
    #[serde(rename = "sekretar")]
    Sekretar,
    #[serde(rename = "menadzer-opreme")]
    MenadzerOpreme,
}

impl Role {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Admin,
            Self::Clan,
            Self::Vodic,
            Self::Blagajnik,
            Self::Sekretar,
            Self::MenadzerOpreme,
        ]
    }

    /// Wire identifier as stored on the member record.
    pub const fn wire(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Clan => "clan",
            Self::Vodic => "vodic",
            Self::Blagajnik => "blagajnik",
            Self::Sekretar => "sekretar",
            Self::MenadzerOpreme => "menadzer-opreme",
        }
    }

    /// Human-readable label for a known role.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Clan => "Član",
            Self::Vodic => "Vodič",
            Self::Blagajnik => "Blagajnik",
            Self::Sekretar => "Sekretar",
            Self::MenadzerOpreme => "Menadžer opreme",
        }
    }

    /// Parses a wire identifier. Unknown strings yield `None`, never an error.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|role| role.wire() == raw)
    }
}

/// Display style token for a role badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    Red,
    Blue,
    Orange,
    Emerald,
    Yellow,
    Slate,
    Neutral,
}

impl StyleToken {
    /// CSS utility classes rendered by the front-end for this token.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Red => "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300",
            Self::Blue => "bg-blue-100 text-blue-900 dark:bg-blue-950/40 dark:text-blue-200",
            Self::Orange => {
                "bg-orange-100 text-orange-900 dark:bg-orange-950/40 dark:text-orange-200"
            }
            Self::Emerald => {
                "bg-emerald-100 text-emerald-900 dark:bg-emerald-950/40 dark:text-emerald-200"
            }
            Self::Yellow => {
                "bg-yellow-100 text-yellow-900 dark:bg-yellow-950/40 dark:text-yellow-200"
            }
            Self::Slate => "bg-slate-200 text-slate-900 dark:bg-slate-800/60 dark:text-slate-200",
            Self::Neutral => "bg-gray-100 text-gray-800 dark:bg-gray-800 dark:text-gray-300",
        }
    }
}

/// Label for a raw role string. Unknown roles come back unchanged.
pub fn role_label(raw: &str) -> Cow<'_, str> {
    match Role::parse(raw) {
        Some(role) => Cow::Borrowed(role.label()),
        None => Cow::Borrowed(raw),
    }
}

/// Badge style for a raw role string. Unknown roles get the neutral token.
pub fn role_style(raw: &str) -> StyleToken {
    match Role::parse(raw) {
        Some(Role::Admin) => StyleToken::Red,
        Some(Role::Clan) => StyleToken::Blue,
        Some(Role::Vodic) => StyleToken::Orange,
        Some(Role::Blagajnik) => StyleToken::Emerald,
        Some(Role::Sekretar) => StyleToken::Yellow,
        Some(Role::MenadzerOpreme) => StyleToken::Slate,
        None => StyleToken::Neutral,
    }
}

/// A guardable operation or view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewFinances,
    RecordPayment,
    CreateAction,
    EditAction,
    AddPastAction,
    RegisterMember,
    ManageRoles,
    ExportAnnualReport,
    ViewMemberRegistry,
}

impl Capability {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::ViewFinances,
            Self::RecordPayment,
            Self::CreateAction,
            Self::EditAction,
            Self::AddPastAction,
            Self::RegisterMember,
            Self::ManageRoles,
            Self::ExportAnnualReport,
            Self::ViewMemberRegistry,
        ]
    }
}

/// Explicit allow-list per capability. `Role::Admin` is always listed, never
/// implied.
pub fn allowed_roles(capability: Capability) -> &'static [Role] {
    match capability {
        Capability::ViewFinances | Capability::RecordPayment => {
            &[Role::Admin, Role::Blagajnik]
        }
        Capability::CreateAction | Capability::EditAction | Capability::AddPastAction => {
            &[Role::Admin, Role::Vodic]
        }
        Capability::RegisterMember | Capability::ExportAnnualReport => {
            &[Role::Admin, Role::Sekretar]
        }
        Capability::ManageRoles => &[Role::Admin],
        Capability::ViewMemberRegistry => &[
            Role::Admin,
            Role::Clan,
            Role::Vodic,
            Role::Blagajnik,
            Role::Sekretar,
            Role::MenadzerOpreme,
        ],
    }
}

/// Pure set-membership test. An absent role (not authenticated) is denied
/// everywhere.
pub fn can_access(capability: Capability, role: Option<Role>) -> bool {
    match role {
        Some(role) => allowed_roles(capability).contains(&role),
        None => false,
    }
}
