/// Status shown for a company × tax cell on dashboards and the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStatus {
    Posted,
    Pending,
    NotApplicable,
    Missing,
    Unconfigured,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub icon: &'static str,
    pub label: &'static str,
    pub color_key: &'static str,
}

impl DisplayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Posted => "Postado",
            DisplayStatus::Pending => "Pendente",
            DisplayStatus::NotApplicable => "Não Aplicável",
            DisplayStatus::Missing => "Falta Criar",
            DisplayStatus::Unconfigured => "Não Configurado",
            DisplayStatus::Unknown => "Desconhecido",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DisplayStatus::Posted => "check-circle",
            DisplayStatus::Pending => "clock",
            DisplayStatus::NotApplicable => "minus-circle",
            DisplayStatus::Missing => "alert-triangle",
            DisplayStatus::Unconfigured => "slash",
            DisplayStatus::Unknown => "help-circle",
        }
    }

    pub fn color_key(&self) -> &'static str {
        match self {
            DisplayStatus::Posted => "success",
            DisplayStatus::Pending => "warning",
            DisplayStatus::NotApplicable => "info",
            DisplayStatus::Missing => "danger",
            DisplayStatus::Unconfigured => "muted",
            DisplayStatus::Unknown => "secondary",
        }
    }

    pub fn badge(&self) -> StatusBadge {
        StatusBadge {
            icon: self.icon(),
            label: self.label(),
            color_key: self.color_key(),
        }
    }
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
