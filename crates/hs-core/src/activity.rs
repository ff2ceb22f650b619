//! Activity kinds the scheduler generates and the trips derived from them.

use std::fmt;

/// The purpose of an episode (and of the trip that leads to it).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    PrimaryWork,
    SecondaryWork,
    WorkBasedBusiness,
    WorkAtHomeBusiness,
    ReturnFromWork,
    School,
    IndividualOther,
    Market,
    JointOther,
    JointMarket,
    /// Only used as a trip purpose.
    Home,
}

impl Activity {
    /// Every activity, in declaration order.
    pub const ALL: [Activity; 11] = [
        Activity::PrimaryWork,
        Activity::SecondaryWork,
        Activity::WorkBasedBusiness,
        Activity::WorkAtHomeBusiness,
        Activity::ReturnFromWork,
        Activity::School,
        Activity::IndividualOther,
        Activity::Market,
        Activity::JointOther,
        Activity::JointMarket,
        Activity::Home,
    ];

    /// Stored in the work project.
    #[inline]
    pub fn is_work(self) -> bool {
        matches!(
            self,
            Activity::PrimaryWork
                | Activity::SecondaryWork
                | Activity::WorkBasedBusiness
                | Activity::WorkAtHomeBusiness
                | Activity::ReturnFromWork
        )
    }

    /// Shared by several household members.
    #[inline]
    pub fn is_joint(self) -> bool {
        matches!(self, Activity::JointOther | Activity::JointMarket)
    }

    /// Performed at the home zone; a person already at home does not travel
    /// for it.
    #[inline]
    pub fn is_at_home(self) -> bool {
        matches!(self, Activity::ReturnFromWork | Activity::WorkAtHomeBusiness)
    }

    /// Trip purposes that may be linked into a joint tour.
    #[inline]
    pub fn is_joint_trip_purpose(self) -> bool {
        matches!(self, Activity::JointOther | Activity::JointMarket | Activity::Home)
    }

    /// Lower-case identifier used in output files.
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::PrimaryWork        => "primary_work",
            Activity::SecondaryWork      => "secondary_work",
            Activity::WorkBasedBusiness  => "work_based_business",
            Activity::WorkAtHomeBusiness => "work_at_home_business",
            Activity::ReturnFromWork     => "return_from_work",
            Activity::School             => "school",
            Activity::IndividualOther    => "individual_other",
            Activity::Market             => "market",
            Activity::JointOther         => "joint_other",
            Activity::JointMarket        => "joint_market",
            Activity::Home               => "home",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
