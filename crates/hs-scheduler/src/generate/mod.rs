//! Episode generation into the project schedules.
//!
//! Households are generated in a fixed priority order: work (with its
//! nested work-based business, secondary work and return home), school,
//! joint other, joint market, individual other, market.  Later steps read
//! the projects filled by earlier ones: person and household status come
//! from work and school, joint participants are filtered by their work and
//! school windows.

mod individual;
mod joint;
mod school;
mod work;

use hs_core::Activity;
use hs_schedule::{LocationChoice, TravelTime};

use crate::SchedulerResult;
use crate::pass::HouseholdPass;

impl<T: TravelTime, L: LocationChoice> HouseholdPass<'_, T, L> {
    pub(crate) fn generate(&mut self) -> SchedulerResult<()> {
        let members = self.household.size();
        for index in 0..members {
            self.generate_work(index)?;
            self.generate_school(index)?;
        }
        self.generate_joint(Activity::JointOther)?;
        self.generate_joint(Activity::JointMarket)?;
        for index in 0..members {
            self.generate_individual(index, Activity::IndividualOther)?;
        }
        for index in 0..members {
            self.generate_individual(index, Activity::Market)?;
        }
        Ok(())
    }
}
