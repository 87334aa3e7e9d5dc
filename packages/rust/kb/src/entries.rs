//! The curated compound reference table.
//!
//! Adding a compound means adding one `(key, entry)` pair here — the
//! transformer and renderer never change. Order matters: the lookup scans
//! this table front to back and stops at the first substring match.

use crate::KnowledgeBaseEntry;

/// Build the curated table in its canonical match order.
pub(crate) fn curated_entries() -> Vec<(String, KnowledgeBaseEntry)> {
    vec![
        ("BPC-157".to_string(), bpc_157()),
        ("GHK-Cu".to_string(), ghk_cu()),
        ("Tesamorelin".to_string(), tesamorelin()),
        // Covers GLP-2, GLP-3, and future GLP analogs.
        ("GLP".to_string(), glp()),
        ("NAD+".to_string(), nad_plus()),
    ]
}

/// Generic entry for products no curated key matches. Descriptive fields
/// reference the product name; chemistry fields defer to documentation.
pub(crate) fn fallback_for(name: &str) -> KnowledgeBaseEntry {
    let display = if name.trim().is_empty() { "This product" } else { name };

    KnowledgeBaseEntry {
        compound_class: "research-grade peptide".into(),
        overview: format!(
            "{display} is a high-purity research peptide provided for laboratory investigations."
        ),
        scientific_background: format!(
            "{display} is supplied as a lyophilized powder with >98% purity verified by HPLC \
             analysis. This research-grade peptide is manufactured under strict quality control \
             standards."
        ),
        research_applications: vec![
            "General peptide research".into(),
            "Biochemical assays".into(),
            "Cell culture studies".into(),
            "Protein interaction studies".into(),
        ],
        molecular_formula: "See Certificate of Analysis".into(),
        molecular_weight: "See Certificate of Analysis".into(),
        cas_number: "Available upon request".into(),
        sequence: "See product documentation".into(),
        reconstitution_concentration: "1 mg/mL".into(),
        stability_lyophilized: "24 months at -20°C".into(),
        stability_reconstituted: "4 weeks at 2-8°C".into(),
        stability_working: "7 days at 2-8°C".into(),
        related_compounds: vec![
            "Contact for recommendations based on your research needs".into(),
        ],
        keywords: vec![
            "research peptide".into(),
            "laboratory grade".into(),
            "high purity".into(),
        ],
    }
}

fn bpc_157() -> KnowledgeBaseEntry {
    KnowledgeBaseEntry {
        compound_class: "gastric pentadecapeptide".into(),
        overview: "BPC-157 stands for Body Protection Compound-157, a synthetic peptide \
                   consisting of 15 amino acids derived from a protective protein found in \
                   human gastric juice."
            .into(),
        scientific_background:
            "BPC-157 (Body Protection Compound-157) is a synthetic pentadecapeptide with the \
             sequence Gly-Glu-Pro-Pro-Pro-Gly-Lys-Pro-Ala-Asp-Asp-Ala-Gly-Leu-Val. Originally \
             isolated from gastric juice, this stable gastric pentadecapeptide has demonstrated \
             remarkable stability in human gastric juice and maintains its structure even in the \
             harsh acidic environment of the stomach.\n\nResearch has shown that BPC-157 exhibits \
             cytoprotective and anti-ulcer activity, with studies exploring its potential \
             mechanisms involving the nitric oxide (NO) system, prostaglandin system, and growth \
             factor modulation. The peptide has been studied for its effects on angiogenesis, \
             with research indicating it may influence VEGF expression and blood vessel formation."
                .into(),
        research_applications: vec![
            "Tissue repair and wound healing studies".into(),
            "Angiogenesis and vascular research".into(),
            "Gastrointestinal protection investigations".into(),
            "Musculoskeletal injury models".into(),
            "Tendon and ligament healing protocols".into(),
            "Inflammatory response modulation".into(),
            "Gut-brain axis research".into(),
            "Cellular migration studies".into(),
        ],
        molecular_formula: "C₆₂H₉₈N₁₆O₂₂".into(),
        molecular_weight: "1419.53 g/mol".into(),
        cas_number: "137525-51-0".into(),
        sequence: "Gly-Glu-Pro-Pro-Pro-Gly-Lys-Pro-Ala-Asp-Asp-Ala-Gly-Leu-Val".into(),
        reconstitution_concentration: "1-2 mg/mL".into(),
        stability_lyophilized: "36 months at -20°C".into(),
        stability_reconstituted: "4-6 weeks at 2-8°C".into(),
        stability_working: "7 days at 2-8°C".into(),
        related_compounds: vec![
            "TB-500 (Thymosin Beta-4) - Complementary tissue repair research".into(),
            "GHK-Cu (Copper Peptide) - Tissue remodeling studies".into(),
            "Thymosin Alpha-1 - Immune modulation research".into(),
        ],
        keywords: vec![
            "pentadecapeptide".into(),
            "gastric peptide".into(),
            "tissue repair".into(),
            "angiogenesis".into(),
            "wound healing research".into(),
        ],
    }
}

fn ghk_cu() -> KnowledgeBaseEntry {
    KnowledgeBaseEntry {
        compound_class: "copper-binding tripeptide complex".into(),
        overview: "GHK-Cu is a naturally occurring copper complex of the tripeptide \
                   Gly-His-Lys, first isolated from human plasma and later found in saliva \
                   and urine."
            .into(),
        scientific_background:
            "GHK-Cu (Glycyl-L-Histidyl-L-Lysine-Copper(II)) is a naturally occurring copper \
             complex that was first isolated from human plasma by Pickart and Thaler in 1973. \
             The tripeptide has a strong affinity for copper(II), with a binding constant of \
             10^16 M^-1 at physiological pH.\n\nThe copper-peptide complex has been extensively \
             studied for its role in tissue remodeling, with research showing it can modulate \
             the expression of genes involved in the extracellular matrix remodeling process. \
             Studies indicate GHK-Cu influences the activity of metalloproteinases and their \
             inhibitors (TIMPs), as well as stimulating collagen synthesis."
                .into(),
        research_applications: vec![
            "Collagen synthesis and skin aging research".into(),
            "Wound healing acceleration studies".into(),
            "Hair follicle research and growth studies".into(),
            "Antioxidant enzyme expression".into(),
            "Extracellular matrix remodeling".into(),
            "Anti-inflammatory pathway investigation".into(),
            "Stem cell differentiation research".into(),
            "Neuroprotection studies".into(),
        ],
        molecular_formula: "C₁₄H₂₄N₆O₄·Cu".into(),
        molecular_weight: "403.93 g/mol".into(),
        cas_number: "49557-75-7".into(),
        sequence: "Gly-His-Lys".into(),
        reconstitution_concentration: "1-5 mg/mL".into(),
        stability_lyophilized: "24 months at -20°C".into(),
        stability_reconstituted: "2-4 weeks at 2-8°C".into(),
        stability_working: "48-72 hours at 2-8°C".into(),
        related_compounds: vec![
            "Matrixyl (Palmitoyl Pentapeptide) - Collagen synthesis research".into(),
            "Argireline (Acetyl Hexapeptide) - Neuromuscular research".into(),
            "BPC-157 - Tissue repair studies".into(),
        ],
        keywords: vec![
            "copper peptide".into(),
            "tripeptide".into(),
            "collagen".into(),
            "tissue remodeling".into(),
            "skin research".into(),
        ],
    }
}

fn tesamorelin() -> KnowledgeBaseEntry {
    KnowledgeBaseEntry {
        compound_class: "synthetic growth hormone-releasing hormone (GHRH) analog".into(),
        overview: "Tesamorelin is a synthetic peptide consisting of 44 amino acids, designed \
                   as a stabilized analog of human growth hormone-releasing hormone."
            .into(),
        scientific_background:
            "Tesamorelin is a synthetic analog of human growth hormone-releasing hormone (GHRH), \
             also known as growth hormone-releasing factor (GRF). It consists of the 44 amino \
             acid sequence of human GHRH with a trans-3-hexenoic acid group modification at the \
             N-terminus, which increases stability and half-life.\n\nThe peptide acts as a GHRH \
             receptor agonist, stimulating the synthesis and pulsatile release of growth hormone \
             from the anterior pituitary. Research has focused on its effects on growth hormone \
             secretion patterns and subsequent IGF-1 production."
                .into(),
        research_applications: vec![
            "Growth hormone secretion studies".into(),
            "Pituitary function research".into(),
            "Metabolic regulation investigations".into(),
            "Body composition studies".into(),
            "Lipodystrophy research".into(),
            "Aging and hormone decline studies".into(),
            "IGF-1 pathway research".into(),
            "Hypothalamic-pituitary axis studies".into(),
        ],
        molecular_formula: "C₂₂₁H₃₆₆N₇₂O₆₇S".into(),
        molecular_weight: "5135.89 g/mol".into(),
        cas_number: "218949-48-5".into(),
        sequence: "Modified 44-amino acid sequence".into(),
        reconstitution_concentration: "1-2 mg/mL".into(),
        stability_lyophilized: "24 months at -20°C".into(),
        stability_reconstituted: "14 days at 2-8°C".into(),
        stability_working: "24 hours at room temperature".into(),
        related_compounds: vec![
            "CJC-1295 - Extended GHRH analog research".into(),
            "Sermorelin - GHRH fragment studies".into(),
            "Ipamorelin - Growth hormone secretagogue research".into(),
        ],
        keywords: vec![
            "GHRH analog".into(),
            "growth hormone".into(),
            "pituitary".into(),
            "IGF-1".into(),
            "metabolic research".into(),
        ],
    }
}

fn glp() -> KnowledgeBaseEntry {
    KnowledgeBaseEntry {
        compound_class: "glucagon-like peptide analog".into(),
        overview: "GLP peptides are incretin hormones derived from proglucagon, playing \
                   crucial roles in glucose homeostasis and intestinal function."
            .into(),
        scientific_background:
            "Glucagon-like peptides (GLPs) are a family of incretin hormones derived from the \
             post-translational processing of proglucagon. These peptides play crucial roles in \
             glucose homeostasis, insulin secretion, and gastrointestinal function.\n\nGLP \
             receptor agonists have been extensively studied for their effects on \
             glucose-dependent insulin secretion, glucagon suppression, gastric emptying, and \
             satiety signaling. Research has explored their potential in metabolic regulation \
             and cellular proliferation pathways."
                .into(),
        research_applications: vec![
            "Glucose metabolism research".into(),
            "Insulin secretion studies".into(),
            "Intestinal growth and repair".into(),
            "Appetite regulation research".into(),
            "Metabolic syndrome investigations".into(),
            "Diabetes research models".into(),
            "Gut hormone signaling".into(),
            "Neuroprotection studies".into(),
        ],
        molecular_formula: "Variable by specific analog".into(),
        molecular_weight: "See specific product COA".into(),
        cas_number: "Compound-specific".into(),
        sequence: "Modified GLP sequence".into(),
        reconstitution_concentration: "0.5-1 mg/mL".into(),
        stability_lyophilized: "24 months at -20°C".into(),
        stability_reconstituted: "7-14 days at 2-8°C".into(),
        stability_working: "24 hours at 2-8°C".into(),
        related_compounds: vec![
            "Exenatide - GLP-1 receptor agonist research".into(),
            "Liraglutide - Long-acting GLP-1 analog".into(),
            "GIP - Glucose-dependent insulinotropic peptide".into(),
        ],
        keywords: vec![
            "incretin".into(),
            "glucose metabolism".into(),
            "insulin".into(),
            "diabetes research".into(),
            "gut hormone".into(),
        ],
    }
}

fn nad_plus() -> KnowledgeBaseEntry {
    KnowledgeBaseEntry {
        compound_class: "essential coenzyme".into(),
        overview: "NAD+ (Nicotinamide Adenine Dinucleotide) is a critical coenzyme found in \
                   all living cells, essential for energy metabolism and cellular processes."
            .into(),
        scientific_background:
            "NAD+ (Nicotinamide Adenine Dinucleotide) is a fundamental coenzyme present in all \
             living cells, playing crucial roles in metabolism, energy production, and cellular \
             signaling. It exists in two forms: NAD+ (oxidized) and NADH (reduced), functioning \
             as an electron carrier in redox reactions.\n\nNAD+ serves as a substrate for \
             several important enzymes including sirtuins (SIRT1-7), poly(ADP-ribose) \
             polymerases (PARPs), and cyclic ADP-ribose synthases. Research has focused on NAD+ \
             decline with age and its role in cellular senescence, DNA repair, and metabolic \
             homeostasis."
                .into(),
        research_applications: vec![
            "Cellular metabolism studies".into(),
            "Aging and longevity research".into(),
            "Sirtuin activation studies".into(),
            "Mitochondrial function research".into(),
            "DNA repair mechanisms".into(),
            "Circadian rhythm studies".into(),
            "Neuroprotection research".into(),
            "Metabolic disease models".into(),
        ],
        molecular_formula: "C₂₁H₂₇N₇O₁₄P₂".into(),
        molecular_weight: "663.43 g/mol".into(),
        cas_number: "53-84-9".into(),
        sequence: "Not applicable (coenzyme)".into(),
        reconstitution_concentration: "10-50 mg/mL".into(),
        stability_lyophilized: "24 months at -20°C".into(),
        stability_reconstituted: "7 days at 2-8°C".into(),
        stability_working: "Use immediately after preparation".into(),
        related_compounds: vec![
            "NMN (Nicotinamide Mononucleotide) - NAD+ precursor".into(),
            "NR (Nicotinamide Riboside) - NAD+ precursor".into(),
            "Resveratrol - Sirtuin activation research".into(),
        ],
        keywords: vec![
            "coenzyme".into(),
            "metabolism".into(),
            "aging".into(),
            "sirtuin".into(),
            "mitochondria".into(),
            "cellular energy".into(),
        ],
    }
}
