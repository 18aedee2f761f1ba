use std::str::FromStr;

use crate::error::PlannerError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Goals {
    pub short_term: String,
    pub medium_term: String,
    pub long_term: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Revenue {
    pub products: String,
    pub services: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedCosts {
    pub tools: String,
    pub hosting: String,
    pub workspace: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableCosts {
    pub marketing: String,
    pub gateway_percentage: String,
    pub others: String,
}

/// Every value currently typed into the planner, exactly as entered.
///
/// Values stay as text; numeric meaning is assigned by [`crate::calc::coerce`]
/// at read time, so an empty field is a valid zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    pub goals: Goals,
    pub revenue: Revenue,
    pub fixed_costs: FixedCosts,
    pub variable_costs: VariableCosts,
    pub emergency: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    ShortTermGoal,
    MediumTermGoal,
    LongTermGoal,
    Products,
    Services,
    Tools,
    Hosting,
    Workspace,
    Marketing,
    GatewayPercentage,
    Others,
    Emergency,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::ShortTermGoal,
        Field::MediumTermGoal,
        Field::LongTermGoal,
        Field::Products,
        Field::Services,
        Field::Tools,
        Field::Hosting,
        Field::Workspace,
        Field::Marketing,
        Field::GatewayPercentage,
        Field::Others,
        Field::Emergency,
    ];

    /// Stable key, also used as the input's `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::ShortTermGoal => "goals.short_term",
            Field::MediumTermGoal => "goals.medium_term",
            Field::LongTermGoal => "goals.long_term",
            Field::Products => "revenue.products",
            Field::Services => "revenue.services",
            Field::Tools => "fixed_costs.tools",
            Field::Hosting => "fixed_costs.hosting",
            Field::Workspace => "fixed_costs.workspace",
            Field::Marketing => "variable_costs.marketing",
            Field::GatewayPercentage => "variable_costs.gateway_percentage",
            Field::Others => "variable_costs.others",
            Field::Emergency => "emergency",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::ShortTermGoal => "Meta Curto Prazo (0-3 meses) R$",
            Field::MediumTermGoal => "Meta Médio Prazo (3-12 meses) R$",
            Field::LongTermGoal => "Meta Longo Prazo (1-5 anos) R$",
            Field::Products => "Produtos Digitais R$",
            Field::Services => "Serviços R$",
            Field::Tools => "Ferramentas (Canva, etc) R$",
            Field::Hosting => "Hospedagem R$",
            Field::Workspace => "Workspace R$",
            Field::Marketing => "Marketing R$",
            Field::GatewayPercentage => "Taxa Gateway (%)",
            Field::Others => "Outros R$",
            Field::Emergency => "Reserva de Emergência Atual R$",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::ShortTermGoal => "Ex: 5.000",
            Field::MediumTermGoal => "Ex: 10.000",
            Field::LongTermGoal => "Ex: 100.000",
            Field::GatewayPercentage => "Ex: 2.99",
            _ => "0,00",
        }
    }
}

impl FromStr for Field {
    type Err = PlannerError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key() == key)
            .ok_or_else(|| PlannerError::UnknownField(key.to_string()))
    }
}

impl FormSnapshot {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::ShortTermGoal => &self.goals.short_term,
            Field::MediumTermGoal => &self.goals.medium_term,
            Field::LongTermGoal => &self.goals.long_term,
            Field::Products => &self.revenue.products,
            Field::Services => &self.revenue.services,
            Field::Tools => &self.fixed_costs.tools,
            Field::Hosting => &self.fixed_costs.hosting,
            Field::Workspace => &self.fixed_costs.workspace,
            Field::Marketing => &self.variable_costs.marketing,
            Field::GatewayPercentage => &self.variable_costs.gateway_percentage,
            Field::Others => &self.variable_costs.others,
            Field::Emergency => &self.emergency,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ShortTermGoal => &mut self.goals.short_term,
            Field::MediumTermGoal => &mut self.goals.medium_term,
            Field::LongTermGoal => &mut self.goals.long_term,
            Field::Products => &mut self.revenue.products,
            Field::Services => &mut self.revenue.services,
            Field::Tools => &mut self.fixed_costs.tools,
            Field::Hosting => &mut self.fixed_costs.hosting,
            Field::Workspace => &mut self.fixed_costs.workspace,
            Field::Marketing => &mut self.variable_costs.marketing,
            Field::GatewayPercentage => &mut self.variable_costs.gateway_percentage,
            Field::Others => &mut self.variable_costs.others,
            Field::Emergency => &mut self.emergency,
        };
        *slot = value.into();
    }

    /// Copy of this snapshot with one field replaced.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }
}
