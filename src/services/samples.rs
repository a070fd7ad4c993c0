//! Built-in sample passages.
//!
//! Used by the `load-samples` command and as stand-in content when a letter
//! cannot be read in development mode. This text is written in the style of
//! the letters; it is not quoted from them.

use crate::domain::models::{DocumentChunk, DocumentMetadata};

/// Year whose passages are used when no sample set exists for a letter's year.
pub const DEFAULT_SAMPLE_YEAR: &str = "2022";

const SAMPLES_2023: [&str; 3] = [
    "To the Shareholders of Berkshire Hathaway Inc.: Charlie Munger and I have the good fortune to work with a truly exceptional group of managers. These individuals run their operations with autonomy and dedication that would make any CEO proud. At Berkshire, our managers know that they will not be second-guessed by headquarters so long as their business strategies make sense, their conduct is ethical, and their communications with us are transparent. Our hands-off approach allows these talented individuals to maximize the potential of their operations.",
    "We continue to focus on businesses with enduring competitive advantages, or what we call economic moats. These businesses possess pricing power, cost advantages, high switching costs, or other attributes that protect them from competition. We prefer companies that can grow their earnings while requiring minimal capital investment. This approach has served us well over the decades and remains central to our investment philosophy.",
    "The key to successful investing is understanding that you're buying a piece of a business, not a stock symbol. When we invest in a company, we think like owners, not traders. We want to own businesses that we can understand, that have predictable cash flows, and that are managed by competent and honest people. This approach may seem simple, but it's surprisingly difficult to execute consistently.",
];

const SAMPLES_2022: [&str; 3] = [
    "Cryptocurrency and digital assets continue to capture headlines, but we remain skeptical of their intrinsic value. These assets produce nothing - they don't generate cash flows, create products, or provide services. They are essentially speculative instruments that derive their value solely from the hope that someone else will pay more for them tomorrow. This violates our fundamental investment principles of buying productive assets at reasonable prices.",
    "American business has been the primary driver of our country's prosperity over the past century. Despite periodic setbacks, recessions, and market volatility, the long-term trajectory of American enterprise remains remarkably positive. We continue to believe that betting against America has been, and will continue to be, a mistake. Our diversified portfolio of American businesses reflects this conviction.",
    "Management quality is perhaps the most important factor in our investment decisions. We look for leaders who think like owners, allocate capital wisely, and maintain the highest ethical standards. These individuals should be able to explain their businesses clearly and honestly to shareholders. When we find such leaders running excellent businesses at reasonable prices, we try to become long-term partners with them.",
];

const SAMPLES_2021: [&str; 3] = [
    "The pandemic tested businesses worldwide, revealing both strengths and vulnerabilities in different industries. Our decentralized structure and diverse portfolio helped us weather this unprecedented challenge. While some of our businesses suffered, others thrived. This diversification, combined with our strong balance sheet, allowed us to continue investing for the long term even during uncertain times.",
    "Market volatility creates opportunities for patient investors with permanent capital. During periods of widespread pessimism, we often find excellent businesses trading at attractive prices. Our ability to act decisively during these periods, without the pressure of quarterly performance metrics or fund redemptions, gives us a significant advantage over many other investors.",
    "We remain committed to our acquisition strategy of buying entire businesses rather than just stock positions. When we acquire companies, we provide stability and permanence that appeals to many business owners. We promise minimal interference with successful operations while providing access to Berkshire's financial strength and resources.",
];

/// Stand-in passages for a letter year; unknown years get the 2022 set.
pub fn sample_content_for_year(year: &str) -> &'static [&'static str] {
    match year {
        "2023" => &SAMPLES_2023,
        "2021" => &SAMPLES_2021,
        _ => &SAMPLES_2022,
    }
}

/// The curated sample set loaded by `load-samples`.
pub fn sample_letters() -> Vec<DocumentChunk> {
    [
        (
            "Our economic principles at Berkshire are simple: we buy businesses we can understand that are trading at reasonable prices relative to their earnings power. We focus on companies with strong competitive positions and predictable cash flows. We prefer businesses that don't require significant capital expenditures to maintain their competitive position.",
            "2023",
            0,
        ),
        (
            "Cryptocurrency has no productive output. It produces nothing, creates nothing, and adds no value to society. It is essentially a gambling token, and we will never invest in it. Our focus remains on productive assets that generate real value for shareholders and society.",
            "2022",
            1,
        ),
        (
            "The key to successful investing is buying wonderful companies at fair prices, not fair companies at wonderful prices. We look for businesses with wide economic moats - sustainable competitive advantages that protect their profits from competitors. These might include brand recognition, economies of scale, or regulatory advantages.",
            "2023",
            2,
        ),
        (
            "Market volatility is not risk - it's opportunity. When others are fearful, we see chances to buy great businesses at discounted prices. Our cash position allows us to take advantage of market downturns when quality companies trade below their intrinsic value.",
            "2021",
            3,
        ),
        (
            "Management quality is perhaps the most important factor in our investment decisions. We look for leaders who are honest, competent, and aligned with shareholder interests. They should have a track record of capital allocation excellence and treating shareholders fairly.",
            "2023",
            4,
        ),
    ]
    .into_iter()
    .map(|(content, year, chunk_index)| {
        DocumentChunk::new(
            content,
            DocumentMetadata::new(format!("berkshire-hathaway-{year}.pdf"), year, chunk_index),
        )
    })
    .collect()
}
