//! Setup-quality blocks
//!
//! Maps a quality tag to its fixed explanatory block. The table is total over
//! the recognized tags; tags a family does not handle produce no block.

use crate::domain::{FishingType, SetupQuality};
use crate::render::DIVIDER;

/// How a family presents the quality block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityStyle {
    /// Bold banner (TRS, DNP)
    Banner {
        /// Whether the insufficient-data tag is handled
        mtf_validation: bool,
    },
    /// Plain macro block with a leading divider (STS)
    Macro {
        /// Counter-trend fishing sub-tag
        fishing: FishingType,
    },
}

/// Higher timeframe context interpolated into the block
#[derive(Debug, Clone, Copy)]
pub struct TrendContext<'a> {
    pub timeframe: &'a str,
    pub trend: &'a str,
}

/// Build the quality block for a tag, `None` when the tag has no block
pub fn quality_block(
    style: QualityStyle,
    quality: &SetupQuality,
    ctx: TrendContext<'_>,
) -> Option<String> {
    let TrendContext { timeframe, trend } = ctx;

    match (style, quality) {
        (QualityStyle::Banner { .. }, SetupQuality::Premium) => Some(format!(
            "⭐⭐⭐ <b>SETUP PREMIUM</b> ⭐⭐⭐\n\
             📈 {timeframe} em tendência de {trend} favorável\n\
             {DIVIDER}\n\
             💡 Alta probabilidade de sucesso"
        )),
        (QualityStyle::Banner { .. }, SetupQuality::Cautela) => Some(format!(
            "⚠️ <b>CAUTELA RECOMENDADA</b> ⚠️\n\
             📊 {timeframe} sem tendência definida\n\
             {DIVIDER}\n\
             ⚠️ Fractal superior neutro - Risco elevado"
        )),
        (QualityStyle::Banner { .. }, SetupQuality::Contra) => Some(format!(
            "🚫 <b>CONTRA-TENDÊNCIA</b> 🚫\n\
             📉 {timeframe} em tendência de {trend}\n\
             {DIVIDER}\n\
             ⛔ ALTO RISCO - Operação contra o fluxo maior\n\
             ⚠️ Não recomendado para iniciantes"
        )),
        (
            QualityStyle::Banner {
                mtf_validation: true,
            },
            SetupQuality::SemValidacaoMtf,
        ) => Some(format!(
            "📊 <b>SEM VALIDAÇÃO MTF</b> 📊\n\
             📉 {timeframe}: Dados insuficientes\n\
             {DIVIDER}\n\
             ⚠️ Ativo sem histórico suficiente no fractal superior\n\
             💡 Operação permitida, mas sem confirmação de tendência MTF"
        )),
        (QualityStyle::Macro { .. }, SetupQuality::Premium) => Some(format!(
            "{DIVIDER}\n\
             ⭐⭐⭐ SETUP PREMIUM ⭐⭐⭐\n\
             📈 {timeframe} em tendência de {trend} favorável\n\
             {DIVIDER}\n\
             💡 Continuação de tendência"
        )),
        (QualityStyle::Macro { fishing }, SetupQuality::Contra) => {
            let (emoji, title, description) = fishing_banner(fishing);
            Some(format!(
                "{DIVIDER}\n\
                 ⚠️{emoji} {title} {emoji}⚠️\n\
                 📉 {timeframe} em tendência de {trend}\n\
                 {emoji} {description}\n\
                 {DIVIDER}\n\
                 🛑 ALTO RISCO - Contra tendência macro\n\
                 💡 Apenas para traders experientes"
            ))
        }
        _ => None,
    }
}

/// Emoji, title and description of a counter-trend fishing banner
fn fishing_banner(fishing: FishingType) -> (&'static str, &'static str, &'static str) {
    match fishing {
        FishingType::Bottom => ("🎣", "BOTTOM FISHING", "Pescando reversão no FUNDO"),
        FishingType::Top => ("🎣", "TOP FISHING", "Pescando reversão no TOPO"),
        FishingType::None => ("", "CONTRA TENDÊNCIA", "Contra tendência macro"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: QualityStyle = QualityStyle::Banner {
        mtf_validation: true,
    };
    const BANNER_NO_MTF: QualityStyle = QualityStyle::Banner {
        mtf_validation: false,
    };

    fn ctx() -> TrendContext<'static> {
        TrendContext {
            timeframe: "4H",
            trend: "ALTA",
        }
    }

    #[test]
    fn test_banner_premium() {
        let block = quality_block(BANNER, &SetupQuality::Premium, ctx()).unwrap();
        assert_eq!(
            block,
            format!(
                "⭐⭐⭐ <b>SETUP PREMIUM</b> ⭐⭐⭐\n📈 4H em tendência de ALTA favorável\n{}\n💡 Alta probabilidade de sucesso",
                DIVIDER
            )
        );
    }

    #[test]
    fn test_banner_cautela() {
        let block = quality_block(BANNER, &SetupQuality::Cautela, ctx()).unwrap();
        assert_eq!(
            block,
            format!(
                "⚠️ <b>CAUTELA RECOMENDADA</b> ⚠️\n📊 4H sem tendência definida\n{}\n⚠️ Fractal superior neutro - Risco elevado",
                DIVIDER
            )
        );
    }

    #[test]
    fn test_banner_contra() {
        let block = quality_block(BANNER, &SetupQuality::Contra, ctx()).unwrap();
        assert!(block.starts_with("🚫 <b>CONTRA-TENDÊNCIA</b> 🚫\n📉 4H em tendência de ALTA\n"));
        assert!(block.ends_with("⚠️ Não recomendado para iniciantes"));
    }

    #[test]
    fn test_banner_mtf_validation_only_when_enabled() {
        let block = quality_block(BANNER, &SetupQuality::SemValidacaoMtf, ctx()).unwrap();
        assert!(block.starts_with("📊 <b>SEM VALIDAÇÃO MTF</b> 📊\n📉 4H: Dados insuficientes\n"));
        assert!(quality_block(BANNER_NO_MTF, &SetupQuality::SemValidacaoMtf, ctx()).is_none());
    }

    #[test]
    fn test_unrecognized_tag_has_no_block() {
        let tag = SetupQuality::Unrecognized("GOLD".to_string());
        assert!(quality_block(BANNER, &tag, ctx()).is_none());
        let macro_style = QualityStyle::Macro {
            fishing: FishingType::None,
        };
        assert!(quality_block(macro_style, &tag, ctx()).is_none());
    }

    #[test]
    fn test_macro_handles_only_premium_and_contra() {
        let style = QualityStyle::Macro {
            fishing: FishingType::None,
        };
        assert!(quality_block(style, &SetupQuality::Cautela, ctx()).is_none());
        assert!(quality_block(style, &SetupQuality::SemValidacaoMtf, ctx()).is_none());

        let premium = quality_block(style, &SetupQuality::Premium, ctx()).unwrap();
        assert!(premium.starts_with(DIVIDER));
        assert!(premium.ends_with("💡 Continuação de tendência"));
    }

    #[test]
    fn test_macro_contra_fishing_variants() {
        let bottom = quality_block(
            QualityStyle::Macro {
                fishing: FishingType::Bottom,
            },
            &SetupQuality::Contra,
            ctx(),
        )
        .unwrap();
        assert!(bottom.contains("⚠️🎣 BOTTOM FISHING 🎣⚠️\n"));
        assert!(bottom.contains("\n🎣 Pescando reversão no FUNDO\n"));

        let top = quality_block(
            QualityStyle::Macro {
                fishing: FishingType::Top,
            },
            &SetupQuality::Contra,
            ctx(),
        )
        .unwrap();
        assert!(top.contains("⚠️🎣 TOP FISHING 🎣⚠️\n"));

        let generic = quality_block(
            QualityStyle::Macro {
                fishing: FishingType::None,
            },
            &SetupQuality::Contra,
            ctx(),
        )
        .unwrap();
        assert!(generic.contains("⚠️ CONTRA TENDÊNCIA ⚠️\n"));
        assert!(generic.contains("\n Contra tendência macro\n"));
    }
}
