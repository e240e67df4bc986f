use std::sync::LazyLock;

use crate::entities::{tax_type, KnownTaxType, TaxType};

pub static DAS: LazyLock<TaxType> = LazyLock::new(|| tax_type("DAS"));
pub static ISS_RETIDO: LazyLock<TaxType> = LazyLock::new(|| tax_type("ISS_RETIDO"));
pub static FGTS: LazyLock<TaxType> = LazyLock::new(|| tax_type("FGTS"));
pub static DCTF_WEB: LazyLock<TaxType> = LazyLock::new(|| tax_type("DCTFWeb"));

/// Tax types every installation starts with, in display order.
pub fn standard_catalog() -> Vec<KnownTaxType> {
    vec![
        KnownTaxType {
            code: DAS.clone(),
            description: "Documento de Arrecadação do Simples Nacional".to_string(),
        },
        KnownTaxType {
            code: ISS_RETIDO.clone(),
            description: "ISS Retido na Fonte".to_string(),
        },
        KnownTaxType {
            code: FGTS.clone(),
            description: "Fundo de Garantia do Tempo de Serviço".to_string(),
        },
        KnownTaxType {
            code: DCTF_WEB.clone(),
            description: "Declaração de Débitos e Créditos Tributários Federais Previdenciários"
                .to_string(),
        },
    ]
}
