use iso_currency::Currency;

use crate::entities::MonthlyControl;

use super::utils::{format_amount, format_rate};

/// Plain-text monthly control report.
pub(crate) struct ControlReportPrinter {
    currency: Currency,
}

impl ControlReportPrinter {
    pub(crate) fn new() -> Self {
        Self {
            currency: Currency::BRL,
        }
    }

    pub(crate) fn print(&self, control: &MonthlyControl) -> String {
        let mut out = String::new();
        self.print_overview(&mut out, control);
        out.push('\n');
        self.print_companies(&mut out, control);
        if !control.planned.is_empty() {
            out.push('\n');
            self.print_planned(&mut out, control);
        }
        if !control.variances.is_empty() {
            out.push('\n');
            self.print_variances(&mut out, control);
        }
        out
    }

    fn print_overview(&self, out: &mut String, control: &MonthlyControl) {
        let o = &control.overview;
        out.push_str(&format!(
            "Controle mensal {} (posição em {})\n",
            o.period,
            o.as_of.format("%d/%m/%Y")
        ));
        out.push_str(&format!(
            "Empresas: {} | Em dia: {} | Conclusão média: {}\n",
            o.companies,
            o.fully_compliant,
            format_rate(o.average_completion_rate)
        ));
        out.push_str(&format!(
            "Postadas: {} | Pendentes: {} | Não aplicáveis: {} | Faltando: {} | Vencidas: {}\n",
            o.posted, o.pending, o.not_applicable, o.missing, o.overdue
        ));
    }

    fn print_companies(&self, out: &mut String, control: &MonthlyControl) {
        for row in &control.matrix.rows {
            let s = &row.summary;
            out.push_str(&format!(
                "  {:<24} {:>5}  postadas {}, pendentes {}, faltando {}",
                row.company_id.as_str(),
                format_rate(s.completion_rate),
                s.posted,
                s.pending,
                s.missing
            ));
            if !s.missing_taxes.is_empty() {
                let codes: Vec<String> = s.missing_taxes.iter().map(|t| t.to_string()).collect();
                out.push_str(&format!(" ({})", codes.join(", ")));
            }
            out.push('\n');
        }
    }

    fn print_planned(&self, out: &mut String, control: &MonthlyControl) {
        out.push_str("A criar:\n");
        for p in &control.planned {
            out.push_str(&format!(
                "  {} {} vence {}\n",
                p.company_id,
                p.tax_type,
                p.due_date.format("%d/%m/%Y")
            ));
        }
    }

    fn print_variances(&self, out: &mut String, control: &MonthlyControl) {
        out.push_str("Variação mensal:\n");
        for v in &control.variances {
            let pct = v
                .variance_pct
                .map(|p| format!("{:+.1}%", p))
                .unwrap_or_else(|| "n/d".to_string());
            out.push_str(&format!(
                "  {:<12} {:>18} {}\n",
                v.tax_type.to_string(),
                format_amount(v.current_total, self.currency),
                pct
            ));
        }
    }
}
