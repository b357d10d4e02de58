// SPDX-License-Identifier: MPL-2.0
//! Compile-time page content.
//!
//! Everything the page displays is declared here as static data: the owner's
//! profile copy, the project showcase entries, and the contact/social links.
//! Keeping content out of the UI modules means the section views stay pure
//! layout and the showcase grid can be tested against a fixed entry list.

/// One entry in the project showcase grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Decorative header image; entries without one render a placeholder
    /// block instead.
    pub image: Option<&'static str>,
    /// Repository link. Entries without one render a disabled placeholder
    /// action instead of a link.
    pub code: Option<&'static str>,
    /// Live demo link; the action is omitted entirely when absent.
    pub demo: Option<&'static str>,
    /// Featured entries span wider in the grid.
    pub featured: bool,
}

/// A labelled external link rendered as an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One row in the contact-info list. Entries without a URL render as plain
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub url: Option<&'static str>,
}

pub const NAME: &str = "Karan Pratap Singh";
pub const GREETING: &str = "Hi, I'm";
pub const SUBTITLE: &str = "Machine Learning & Fintech Enthusiast";
pub const DESCRIPTION: &str = "Aspiring Data Analyst passionate about transforming financial data \
into actionable insights. Specializing in ML algorithms, predictive modeling, and fintech \
innovation.";

pub const RESUME_URL: &str = "https://karan.dev/Karan_Pratap_Singh_Resume.pdf";

pub const PROJECTS_TITLE: (&str, &str) = ("Featured", "Projects");
pub const PROJECTS_SUBTITLE: &str = "A showcase of my work in machine learning, fintech, and data \
analytics. Each project demonstrates different aspects of my technical skills and problem-solving \
approach.";

pub const CONTACT_TITLE: (&str, &str) = ("Let's", "Connect");
pub const CONTACT_SUBTITLE: &str = "Interested in collaborating or have a question about my work? \
I'd love to hear from you. Let's discuss how we can work together.";
pub const CONTACT_BLURB_TITLE: &str = "Let's Build Something Amazing";
pub const CONTACT_BLURB: &str = "I'm always open to discussing new opportunities, interesting \
projects, and potential collaborations in the machine learning and fintech space.";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/SypherKx",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/karan730",
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com/KaranPratapSingh",
    },
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "itskaranpratapsingh@gmail.com",
        url: Some("mailto:itskaranpratapsingh@gmail.com"),
    },
    ContactInfo {
        label: "LinkedIn",
        value: "linkedin.com/in/karan730",
        url: Some("https://www.linkedin.com/in/karan730"),
    },
    ContactInfo {
        label: "Location",
        value: "India",
        url: None,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Aether Eye: Hybrid-Edge Surveillance",
        description: "A privacy-first surveillance system built on a hybrid-edge architecture \
using ESP32 and FastAPI. Features offline AI for object and speech detection, delivering \
real-time alerts to a mobile app without cloud dependency.",
        tags: &["Python", "FastAPI", "YOLOv8", "ESP32", "React Native", "WebSockets"],
        image: None,
        code: Some("https://github.com/AetherEye/AetherEye"),
        demo: None,
        featured: true,
    },
    Project {
        title: "SP500 Stock Price Prediction",
        description: "A machine learning project that predicts S&P 500 stock prices using \
historical market data. Includes data collection via yfinance, model training with scikit-learn, \
and backtesting for performance evaluation.",
        tags: &["Machine Learning", "Python", "Jupyter Lab"],
        image: Some("sp500-stock-prediction"),
        code: Some("https://github.com/SypherKx/SP500-Stock-Price-Prediction"),
        demo: None,
        featured: true,
    },
    Project {
        title: "Credit Card Fraud Detection",
        description: "A machine learning project to detect fraudulent credit card transactions \
using Logistic Regression. Includes both a Python script for training and evaluation and a \
Streamlit web app for interactive testing.",
        tags: &["Python", "Pandas", "NumPy", "Scikit-learn", "Streamlit"],
        image: Some("credit-card-fraud-detection"),
        code: Some("https://github.com/SypherKx/CardSentinel"),
        demo: None,
        featured: true,
    },
    Project {
        title: "Air Quality Prediction",
        description: "Leverages machine learning models to predict air quality levels based on \
environmental factors such as temperature, humidity, wind speed, and pollutant concentration.",
        tags: &["Python", "Machine Learning", "Jupyter"],
        image: Some("air-quality-prediction"),
        code: Some("https://github.com/SypherKx/AQIPredictor"),
        demo: None,
        featured: true,
    },
    Project {
        title: "Coming Soon...",
        description: "Cooking up something awesome.",
        tags: &["Stay Tuned"],
        image: None,
        code: None,
        demo: None,
        featured: false,
    },
];
