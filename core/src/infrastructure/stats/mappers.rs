use crate::{domain::stats::value_objects::MonthlyStatOverride, entity::stat_overrides};

impl From<&stat_overrides::Model> for MonthlyStatOverride {
    fn from(model: &stat_overrides::Model) -> Self {
        Self {
            user_id: model.user_id,
            month: model.month.clone(),
            waste_saved: model.waste_saved,
            co2_reduced: model.co2_reduced,
        }
    }
}

impl From<stat_overrides::Model> for MonthlyStatOverride {
    fn from(model: stat_overrides::Model) -> Self {
        Self::from(&model)
    }
}
