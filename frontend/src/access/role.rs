use serde::{Deserialize, Serialize};

/// Permission tier carried in `user_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    PlatformAdmin,
    Builder,
    ChannelPartner,
    SalesManager,
    Telecaller,
    MarketingAgent,
    Receptionist,
    BusinessDevelopmentExecutive,
    BusinessDevelopmentManager,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::PlatformAdmin,
        Role::Builder,
        Role::ChannelPartner,
        Role::SalesManager,
        Role::Telecaller,
        Role::MarketingAgent,
        Role::Receptionist,
        Role::BusinessDevelopmentExecutive,
        Role::BusinessDevelopmentManager,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }

    pub fn code(self) -> i32 {
        match self {
            Role::PlatformAdmin => 1,
            Role::Builder => 2,
            Role::ChannelPartner => 3,
            Role::SalesManager => 4,
            Role::Telecaller => 5,
            Role::MarketingAgent => 6,
            Role::Receptionist => 7,
            Role::BusinessDevelopmentExecutive => 8,
            Role::BusinessDevelopmentManager => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::PlatformAdmin => "Platform Admin",
            Role::Builder => "Builder",
            Role::ChannelPartner => "Channel Partner",
            Role::SalesManager => "Sales Manager",
            Role::Telecaller => "Telecaller",
            Role::MarketingAgent => "Marketing Agent",
            Role::Receptionist => "Receptionist",
            Role::BusinessDevelopmentExecutive => "BDE",
            Role::BusinessDevelopmentManager => "BDM",
        }
    }
}

pub fn role_label(code: i32) -> &'static str {
    Role::from_code(code).map(Role::label).unwrap_or("Unknown role")
}
