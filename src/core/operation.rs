//! The numbered menu of operations

use std::fmt;

/// Operations offered by the menu, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    BuildImage,
    RunContainer,
    StartContainer,
    StopContainer,
    RemoveContainer,
    BuildMultiplatformImage,
    PushImage,
    CreateDeployment,
    CreateDeploymentWithReplicas,
    CreateService,
}

/// Header printed above the menu
pub const MENU_HEADER: &str = "Welcome to docker automation";

impl Operation {
    /// All operations in menu order
    pub const ALL: [Self; 10] = [
        Self::BuildImage,
        Self::RunContainer,
        Self::StartContainer,
        Self::StopContainer,
        Self::RemoveContainer,
        Self::BuildMultiplatformImage,
        Self::PushImage,
        Self::CreateDeployment,
        Self::CreateDeploymentWithReplicas,
        Self::CreateService,
    ];

    /// Menu number of this operation, starting at 1
    #[must_use]
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|op| *op == self)
            .map_or(0, |index| index + 1)
    }

    /// Look up an operation from a menu answer. Anything that is not a
    /// number in range yields `None`.
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BuildImage => "Build docker image",
            Self::RunContainer => "Run docker container",
            Self::StartContainer => "Start docker container",
            Self::StopContainer => "Stop docker container",
            Self::RemoveContainer => "Remove docker container",
            Self::BuildMultiplatformImage => "Build multiplatform docker image",
            Self::PushImage => "Push docker image",
            Self::CreateDeployment => "Create kubernetes deployment",
            Self::CreateDeploymentWithReplicas => "Create kubernetes deployment with replicas",
            Self::CreateService => "Create kubernetes service",
        }
    }

    /// Full menu text, header included
    #[must_use]
    pub fn menu() -> String {
        let mut menu = String::from(MENU_HEADER);
        menu.push('\n');
        for op in Self::ALL {
            menu.push_str(&format!("{op}\n"));
        }
        menu
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
