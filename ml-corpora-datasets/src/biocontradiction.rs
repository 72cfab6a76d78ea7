//! Shared metadata of the cardiovascular claims corpus
//!
//! Both claim datasets are derived from the same annotated corpus and read
//! their files from the same manual subdirectory.

use ml_corpora_core::{DatasetInfo, Version};

/// Manual subdirectory holding the preprocessed claim CSVs
pub const SUBDIRECTORY: &str = "biocontradiction";

pub(crate) const HOMEPAGE: &str =
    "http://staffwww.dcs.shef.ac.uk/people/M.Stevenson/resources/bio_contradictions/";

pub(crate) const CITATION: &str = r"
@Article{Alamri2016,
author={Alamri, Abdulaziz
and Stevenson, Mark},
title={A corpus of potentially contradictory research claims from cardiovascular research abstracts},
journal={Journal of Biomedical Semantics},
year={2016},
month={Jun},
day={07},
volume={7},
number={1},
pages={36},
abstract={Research literature in biomedicine and related fields contains a huge number of claims, such 
as the effectiveness of treatments. These claims are not always consistent and may even contradict each 
other. Being able to identify contradictory claims is important for those who rely on the biomedical literature. 
Automated methods to identify and resolve them are required to cope with the amount of information available. 
However, research in this area has been hampered by a lack of suitable resources. We describe a methodology to 
develop a corpus which addresses this gap by providing examples of potentially contradictory claims and demonstrate  
how it can be applied to identify these claims from Medline abstracts related to the topic of cardiovascular disease.},
issn={2041-1480},
doi={10.1186/s13326-016-0083-z},
url={https://doi.org/10.1186/s13326-016-0083-z}
}";

pub(crate) const DESCRIPTION: &str = "
A set of systematic reviews concerned with four topics in cardiovascular disease were identified
from Medline and analysed to determine whether the abstracts they reviewed contained contradictory
research claims. For each review, annotators were asked to analyse these abstracts to identify
claims within them that answered the question addressed in the review. The annotators were also
asked to indicate how the claim related to that question and the type of the claim.
";

/// Envelope shared by both claim datasets
pub(crate) fn info(name: &str, instructions: &str) -> DatasetInfo {
    DatasetInfo::new(name, Version::new(1, 0, 0))
        .description(DESCRIPTION)
        .homepage(HOMEPAGE)
        .citation(CITATION)
        .manual_download_instructions(instructions)
}
