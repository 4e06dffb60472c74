//! Scenario simulator: form state and the insert payload built from it.

use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use super::estimator::{estimate_impacts, ImpactEstimate, ImpactInputs};

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioForm {
    pub name: String,
    pub description: String,
    pub route_type: String,
    pub freight_type: String,
    pub supplier_rating: String,
    pub distance: String,
    pub weight: String,
}

impl ScenarioForm {
    pub fn impact_inputs(&self) -> ImpactInputs {
        ImpactInputs::from_raw(
            &self.distance,
            &self.weight,
            &self.route_type,
            &self.freight_type,
            &self.supplier_rating,
        )
    }

    pub fn estimate(&self) -> ImpactEstimate {
        estimate_impacts(&self.impact_inputs())
    }

    pub fn validate(&self) -> Result<(), ScenarioFormError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioFormError::MissingName);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioFormError {
    #[error("Scenario name is required")]
    MissingName,
}

/// Row inserted into the `scenarios` collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewScenario {
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub route_data: Value,
    pub freight_data: Value,
    pub supplier_data: Value,
    pub carbon_impact: f64,
    pub cost_impact: f64,
    pub time_impact: f64,
}

impl NewScenario {
    pub fn from_form(user_id: Uuid, form: &ScenarioForm) -> Result<Self, ScenarioFormError> {
        form.validate()?;
        let inputs = form.impact_inputs();
        let impacts = estimate_impacts(&inputs);

        Ok(Self {
            user_id,
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            route_data: json!({
                "type": form.route_type,
                "distance": inputs.distance,
            }),
            freight_data: json!({
                "type": form.freight_type,
                "weight": inputs.weight,
            }),
            supplier_data: json!({ "score": form.supplier_rating }),
            carbon_impact: impacts.carbon_impact,
            cost_impact: impacts.cost_impact,
            time_impact: impacts.time_impact,
        })
    }

    pub fn impacts(&self) -> ImpactEstimate {
        ImpactEstimate {
            carbon_impact: self.carbon_impact,
            cost_impact: self.cost_impact,
            time_impact: self.time_impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ScenarioForm {
        ScenarioForm {
            name: "  Rail pilot ".into(),
            description: "Move the Denver lane to rail".into(),
            route_type: "optimized".into(),
            freight_type: "rail".into(),
            supplier_rating: "good".into(),
            distance: "1000".into(),
            weight: "10".into(),
        }
    }

    #[test]
    fn payload_carries_estimate_and_inputs() {
        let user = Uuid::new_v4();
        let payload = NewScenario::from_form(user, &form()).expect("valid form");
        assert_eq!(payload.user_id, user);
        assert_eq!(payload.name, "Rail pilot");
        assert_eq!(payload.impacts(), form().estimate());
        assert_eq!(payload.route_data["type"], "optimized");
        assert_eq!(payload.route_data["distance"], 1000.0);
        assert_eq!(payload.freight_data["weight"], 10.0);
        assert_eq!(payload.supplier_data["score"], "good");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = form();
        form.name = "   ".into();
        assert_eq!(
            NewScenario::from_form(Uuid::nil(), &form),
            Err(ScenarioFormError::MissingName)
        );
    }

    #[test]
    fn empty_selections_fall_back_to_base_quantities() {
        let form = ScenarioForm {
            name: "Baseline".into(),
            distance: "200".into(),
            weight: "abc".into(),
            ..ScenarioForm::default()
        };
        let estimate = form.estimate();
        assert_eq!(estimate.carbon_impact, 0.0);
        assert_eq!(estimate.cost_impact, 100.0);
        assert_eq!(estimate.time_impact, 4.0);
    }
}
