//! The pose catalog: which photographs a progress check requires.

use serde::{Deserialize, Serialize};

use crate::records::Gender;

/// A named body orientation for progress photography.
///
/// The serialized form is the kebab-case identifier stored on photo records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pose {
    FrontArmsDown,
    FrontBiceps,
    SideLeftArmsDown,
    SideLeftArmsForward,
    SideRightArmsDown,
    SideRightArmsForward,
    BackArmsDown,
    BackArmsExtended,
    BackBiceps,
}

impl Pose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pose::FrontArmsDown => "front-arms-down",
            Pose::FrontBiceps => "front-biceps",
            Pose::SideLeftArmsDown => "side-left-arms-down",
            Pose::SideLeftArmsForward => "side-left-arms-forward",
            Pose::SideRightArmsDown => "side-right-arms-down",
            Pose::SideRightArmsForward => "side-right-arms-forward",
            Pose::BackArmsDown => "back-arms-down",
            Pose::BackArmsExtended => "back-arms-extended",
            Pose::BackBiceps => "back-biceps",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "front-arms-down" => Some(Pose::FrontArmsDown),
            "front-biceps" => Some(Pose::FrontBiceps),
            "side-left-arms-down" => Some(Pose::SideLeftArmsDown),
            "side-left-arms-forward" => Some(Pose::SideLeftArmsForward),
            "side-right-arms-down" => Some(Pose::SideRightArmsDown),
            "side-right-arms-forward" => Some(Pose::SideRightArmsForward),
            "back-arms-down" => Some(Pose::BackArmsDown),
            "back-arms-extended" => Some(Pose::BackArmsExtended),
            "back-biceps" => Some(Pose::BackBiceps),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pose::FrontArmsDown => "Front with arms down",
            Pose::FrontBiceps => "Front double biceps",
            Pose::SideLeftArmsDown => "Left side with arms down",
            Pose::SideLeftArmsForward => "Left side with arms forward",
            Pose::SideRightArmsDown => "Right side with arms down",
            Pose::SideRightArmsForward => "Right side with arms forward",
            Pose::BackArmsDown => "Back with arms down",
            Pose::BackArmsExtended => "Back with arms extended",
            Pose::BackBiceps => "Back double biceps",
        }
    }
}

/// Poses required of every user regardless of gender.
const COMMON_POSES: [Pose; 6] = [
    Pose::FrontArmsDown,
    Pose::SideLeftArmsDown,
    Pose::SideLeftArmsForward,
    Pose::SideRightArmsDown,
    Pose::SideRightArmsForward,
    Pose::BackArmsDown,
];

/// Ordered set of poses a complete photo check requires.
///
/// Male and female catalogs each extend the common set; an unspecified
/// gender degrades to the common set alone.
pub fn required_poses(gender: Gender) -> Vec<Pose> {
    let mut poses = COMMON_POSES.to_vec();
    match gender {
        Gender::Male => {
            poses.push(Pose::FrontBiceps);
            poses.push(Pose::BackBiceps);
        }
        Gender::Female => poses.push(Pose::BackArmsExtended),
        Gender::Unspecified => {}
    }
    poses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_set_is_subset_of_both_gendered_sets() {
        let male = required_poses(Gender::Male);
        let female = required_poses(Gender::Female);
        for pose in COMMON_POSES {
            assert!(male.contains(&pose));
            assert!(female.contains(&pose));
        }
        assert_eq!(male.len(), 8);
        assert_eq!(female.len(), 7);
        assert_eq!(required_poses(Gender::Unspecified).len(), 6);
    }

    #[test]
    fn test_gender_specific_poses() {
        let male = required_poses(Gender::Male);
        assert!(male.contains(&Pose::FrontBiceps));
        assert!(male.contains(&Pose::BackBiceps));
        assert!(!male.contains(&Pose::BackArmsExtended));

        let female = required_poses(Gender::Female);
        assert!(female.contains(&Pose::BackArmsExtended));
        assert!(!female.contains(&Pose::FrontBiceps));
    }

    #[test]
    fn test_string_round_trip() {
        for pose in required_poses(Gender::Male) {
            assert_eq!(Pose::from_str(pose.as_str()), Some(pose));
        }
        assert_eq!(Pose::from_str("handstand"), None);
    }

    #[test]
    fn test_serde_form_matches_as_str() {
        let json = serde_json::to_string(&Pose::SideLeftArmsForward).unwrap();
        assert_eq!(json, "\"side-left-arms-forward\"");
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "side-left-arms-forward");
    }
}
