//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

const INIT_CONFIG: &str = r#"title: My Portfolio
author: Mohith Butta
tagline: Python Programmer & AI Enthusiast
description: Projects, blog, and contact.
email: me@example.com
url: https://example.github.io
root: /

hero:
  subtitle: Python Programmer & AI Enthusiast
  description: Building intelligent solutions and exploring the world of machine learning
  resume: resume.pdf

about:
  - I'm a self-taught programmer passionate about Python and artificial intelligence.
  - I love collaborating on projects and exploring new technologies.

skills:
  Programming Languages: [Python, HTML5, CSS]
  Data Science & ML: [NumPy, Pandas, Matplotlib, scikit-learn]
  Databases: [PostgreSQL, MySQL, SQLite]
  Tools & Platforms: [Git, GitHub, Streamlit, Flask, Django]

projects:
  - title: Stock Market Prediction
    description: Machine learning model for stock price prediction using historical data and technical indicators.
    icon: fas fa-chart-line
    tech: [Python, Scikit-Learn, TensorFlow, Pandas]
    repo: https://github.com/mohithnovoct/Stock_Market_Prediction
  - title: Credit Card Fraud Detection
    description: Machine learning system to detect fraudulent credit card transactions.
    icon: fas fa-credit-card
    tech: [Python, scikit-learn, NumPy, Pandas]
    repo: https://github.com/mohithnovoct/CreditCardFraudDetection

social:
  github: https://github.com/mohithnovoct
  linkedin: https://www.linkedin.com/in/mohith-butta
  twitter: https://x.com/mohith_butta

contact:
  smtp_server: smtp.gmail.com
  smtp_port: 587
  sender: ""
  recipient: ""
"#;

const INIT_POST: &str = r#"---
title: "Hello, World"
date: 2025-08-19
tags: [welcome]
---
# Hello

Welcome to the blog. Posts live in `_posts/` and are listed in `assets/posts.json`.

- Edit this post
- Add an index entry for new posts
- Run `folio-rs server`
"#;

const INIT_INDEX: &str = r#"[
  {
    "slug": "hello-world",
    "title": "Hello, World",
    "description": "A first post to verify the content pipeline end to end.",
    "prettyDate": "Aug 19, 2025",
    "category": "Meta"
  }
]
"#;

const INIT_ROBOTS: &str = "User-agent: *\nAllow: /\n";

/// Scaffold a new site in the target directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?} exists", config_path);
    }

    fs::create_dir_all(target_dir.join("_posts"))?;
    fs::create_dir_all(target_dir.join("assets"))?;

    fs::write(&config_path, INIT_CONFIG)?;
    fs::write(
        target_dir.join("_posts/2025-08-19-hello-world.md"),
        INIT_POST,
    )?;
    fs::write(target_dir.join("assets/posts.json"), INIT_INDEX)?;
    fs::write(target_dir.join("assets/robots.txt"), INIT_ROBOTS)?;

    tracing::info!("Scaffolded site in {:?}", target_dir);
    Ok(())
}
