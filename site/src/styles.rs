//! CSS for the landing page.
//!
//! One stylesheet, inlined into the static export and mounted by the
//! browser build. Light theme, blue/teal accents, system font stack.
//!
//! ```rust
//! use arriva_site::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! # assert!(combined.contains(".carousel"));
//! ```

/// Complete stylesheet for the landing page.
pub const SITE_CSS: &str = r#"
:root {
    --blue-50: #eff6ff;
    --blue-100: #dbeafe;
    --blue-500: #3b82f6;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --blue-800: #1e40af;
    --teal-600: #0d9488;
    --sky-100: #e0f2fe;
    --slate-900: #0f172a;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-900: #111827;
    --green-600: #16a34a;
    --radius: 12px;
    --shadow-sm: 0 1px 2px rgba(15, 23, 42, 0.06);
    --shadow-lg: 0 10px 25px rgba(15, 23, 42, 0.10);
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 1280px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    background: #fff;
    line-height: 1.6;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.container-narrow { max-width: 896px; }
.container-mid { max-width: 1024px; }
.centered { text-align: center; }

/* Event banner */

.event-banner {
    display: flex;
    justify-content: center;
    gap: 12px;
    padding: 8px 16px;
    background: var(--blue-700);
    color: #fff;
    font-size: 14px;
}

.event-banner-link {
    font-weight: 600;
    text-decoration: underline;
}

/* Header */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.92);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--gray-100);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 72px;
}

.header-logo {
    height: 36px;
    width: auto;
}

.header-nav {
    display: flex;
    align-items: center;
    gap: 28px;
}

.nav-link {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    background: none;
    border: 0;
    font: inherit;
    font-weight: 500;
    color: var(--gray-700);
    cursor: pointer;
}

.nav-link:hover { color: var(--blue-600); }

.nav-dropdown { position: relative; }

.nav-dropdown-menu {
    display: none;
    position: absolute;
    top: 100%;
    left: -16px;
    width: 360px;
    padding: 8px;
    background: #fff;
    border-radius: var(--radius);
    box-shadow: var(--shadow-lg);
}

.nav-dropdown:hover .nav-dropdown-menu,
.nav-dropdown:focus-within .nav-dropdown-menu {
    display: block;
}

.dropdown-item {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    padding: 16px;
    border-radius: 8px;
    transition: background 150ms;
}

.dropdown-item:hover { background: var(--gray-50); }
.dropdown-item-icon { color: var(--blue-500); flex-shrink: 0; }
.dropdown-item:hover .dropdown-item-icon { color: var(--blue-700); }
.dropdown-item-label { margin: 0; font-weight: 600; }
.dropdown-item:hover .dropdown-item-label { text-decoration: underline; }
.dropdown-item-description { margin: 0; font-size: 14px; color: var(--gray-500); }

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    font-weight: 600;
    border-radius: var(--radius);
    transition: all 300ms;
}

.btn-primary {
    position: relative;
    overflow: hidden;
    color: #fff;
    background: linear-gradient(to right, var(--blue-600), var(--blue-700));
    box-shadow: var(--shadow-lg);
    border-radius: 8px;
}

.btn-primary:hover {
    transform: scale(1.05);
    background: linear-gradient(to right, var(--blue-700), var(--blue-800));
}

.btn-primary:active { transform: scale(0.95); }
.btn-primary:focus-visible { outline: 4px solid #93c5fd; }
.btn-primary-lg { padding: 16px 32px; font-size: 18px; }
.btn-primary-sm { padding: 8px 16px; font-size: 14px; }

.btn-shine {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
    transform: translateX(-100%);
    transition: transform 1000ms;
}

.btn-primary:hover .btn-shine { transform: translateX(100%); }

.btn-label {
    position: relative;
    z-index: 1;
    display: flex;
    align-items: center;
    gap: 8px;
}

.btn-arrow { transition: transform 200ms; }
.btn:hover .btn-arrow { transform: translateX(4px); }

.btn-secondary {
    padding: 16px 28px;
    color: var(--blue-700);
    border: 2px solid var(--blue-100);
}

.btn-secondary:hover { border-color: var(--blue-500); }

.btn-solid {
    margin-top: 32px;
    padding: 16px 32px;
    color: #fff;
    background: var(--blue-600);
    box-shadow: var(--shadow-lg);
}

.btn-solid:hover { background: var(--blue-700); }

.btn-inverse {
    padding: 16px 32px;
    color: var(--blue-600);
    background: #fff;
}

.btn-inverse:hover { background: var(--gray-100); }

.btn-outline {
    padding: 16px 32px;
    color: #fff;
    border: 2px solid #fff;
}

.btn-outline:hover { background: rgba(255, 255, 255, 0.1); }

/* Hero */

.hero {
    padding: 72px 0 96px;
    background: linear-gradient(135deg, #fff 0%, var(--blue-50) 100%);
}

.hero-grid {
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 14px;
    font-size: 14px;
    font-weight: 600;
    color: var(--blue-700);
    background: var(--blue-100);
    border-radius: 999px;
}

.hero-badge-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--blue-600);
}

.hero-title {
    margin: 20px 0 16px;
    font-size: 52px;
    line-height: 1.1;
    font-weight: 800;
}

.hero-title-accent {
    background: linear-gradient(to right, var(--blue-600), var(--teal-600));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    font-size: 18px;
    color: var(--gray-600);
    max-width: 560px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    margin: 32px 0;
}

.stat-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

.stat-box {
    padding: 24px;
    background: linear-gradient(135deg, #fff, rgba(239, 246, 255, 0.5));
    border: 1px solid rgba(219, 234, 254, 0.5);
    border-radius: 16px;
    box-shadow: var(--shadow-lg);
    transition: all 300ms;
    animation: fade-in-up 600ms ease-out both;
    cursor: pointer;
}

.stat-box:hover {
    transform: translateY(-4px);
    border-color: #bfdbfe;
}

.stat-box-icon {
    display: inline-flex;
    margin-bottom: 12px;
    padding: 8px;
    color: var(--blue-600);
    background: var(--blue-100);
    border-radius: 8px;
}

.stat-box-value {
    margin: 0 0 8px;
    font-size: 36px;
    font-weight: 800;
    line-height: 1;
    background: linear-gradient(to right, var(--blue-600), var(--teal-600));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.stat-box-label {
    margin: 0;
    font-size: 14px;
    font-weight: 600;
    color: var(--gray-600);
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: translateY(0); }
}

/* Carousel */

.carousel {
    position: relative;
    width: 100%;
    min-height: 520px;
}

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 8px;
    margin-top: 16px;
}

.carousel-dot {
    width: 8px;
    height: 8px;
    padding: 0;
    border: 0;
    border-radius: 999px;
    background: var(--gray-300);
    cursor: pointer;
    transition: all 300ms;
}

.carousel-dot:hover { background: var(--gray-400); }

.carousel-dot.active {
    width: 24px;
    background: var(--blue-600);
}

/* Dashboard card */

.dashboard {
    display: flex;
    flex-direction: column;
    gap: 16px;
    min-height: 420px;
    min-width: 280px;
    padding: 24px;
    background: linear-gradient(135deg, var(--blue-50), var(--sky-100));
    border-radius: var(--radius);
}

.dashboard-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.dashboard-title {
    margin: 0;
    font-size: 18px;
    font-weight: 700;
}

.dashboard-period {
    font-size: 12px;
    color: var(--gray-500);
}

.dashboard-panel {
    padding: 16px;
    background: #fff;
    border-radius: 8px;
    box-shadow: var(--shadow-sm);
}

.dashboard-chart {
    display: flex;
    align-items: center;
    gap: 16px;
}

.donut {
    position: relative;
    width: 144px;
    height: 144px;
    min-width: 128px;
    min-height: 128px;
}

.donut-svg {
    width: 100%;
    height: 100%;
}

.donut-center {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}

.donut-total {
    font-size: 28px;
    font-weight: 700;
}

.donut-caption,
.legend-value,
.metric-label {
    font-size: 12px;
    color: var(--gray-500);
}

.legend {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.legend-row {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 12px;
}

.legend-item {
    display: flex;
    align-items: center;
    gap: 8px;
}

.legend-swatch {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    flex-shrink: 0;
}

.legend-text {
    display: flex;
    flex-direction: column;
}

.legend-name {
    font-size: 12px;
    font-weight: 500;
    color: var(--gray-700);
}

.metric-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 12px;
}

.metric-card {
    padding: 12px;
    background: #fff;
    border-radius: 8px;
    box-shadow: var(--shadow-sm);
    transition: box-shadow 200ms;
}

.metric-card:hover { box-shadow: var(--shadow-lg); }

.metric-top {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    margin-bottom: 8px;
}

.metric-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    color: var(--blue-600);
    background: var(--blue-100);
    border-radius: 8px;
}

.metric-change {
    display: flex;
    align-items: center;
    gap: 4px;
    font-size: 12px;
    font-weight: 600;
    color: var(--green-600);
}

.metric-body {
    display: flex;
    flex-direction: column;
}

.metric-value {
    font-size: 18px;
    font-weight: 700;
}

.timeline-title {
    margin: 0 0 12px;
    font-size: 14px;
    font-weight: 600;
    color: var(--gray-700);
}

.timeline-row {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-top: 12px;
}

.timeline-period {
    width: 64px;
    font-size: 12px;
    font-weight: 500;
    color: var(--gray-600);
}

.timeline-track {
    flex: 1;
    height: 8px;
    overflow: hidden;
    background: var(--gray-200);
    border-radius: 999px;
}

.timeline-fill {
    height: 100%;
    background: linear-gradient(to right, var(--blue-500), var(--blue-600));
    border-radius: 999px;
    transition: width 500ms;
}

.timeline-value {
    width: 40px;
    text-align: right;
    font-size: 12px;
    font-weight: 600;
    color: var(--gray-700);
}

/* SEO content */

.why-choose {
    padding: 96px 0;
    background: linear-gradient(135deg, var(--gray-50), var(--blue-50));
}

.why-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 48px;
    align-items: center;
}

.section-pill {
    display: inline-block;
    padding: 4px 16px;
    font-size: 14px;
    font-weight: 600;
    color: var(--blue-700);
    background: var(--blue-100);
    border-radius: 999px;
}

.section-title {
    margin: 16px 0 24px;
    font-size: 40px;
    line-height: 1.15;
    font-weight: 700;
}

.section-lead {
    font-size: 18px;
    color: var(--gray-600);
}

.highlight-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
    padding-top: 16px;
}

.highlight {
    display: flex;
    align-items: flex-start;
    gap: 12px;
}

.highlight-icon { color: var(--green-600); flex-shrink: 0; margin-top: 2px; }
.highlight-title { margin: 0; font-weight: 600; }
.highlight-detail { margin: 0; font-size: 14px; color: var(--gray-600); }

.text-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    margin-top: 24px;
    font-weight: 600;
    color: var(--blue-600);
}

.text-link:hover { color: var(--blue-700); }

.service-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

.service-card {
    padding: 24px;
    background: #fff;
    border: 1px solid var(--gray-100);
    border-radius: 16px;
    box-shadow: var(--shadow-lg);
    transition: box-shadow 200ms;
}

.service-card-title { margin: 16px 0 8px; font-size: 18px; font-weight: 700; }
.service-card-body { margin: 0; font-size: 14px; color: var(--gray-600); }

.tone-blue { color: var(--blue-600); }
.tone-green { color: var(--green-600); }
.tone-purple { color: #9333ea; }
.tone-orange { color: #ea580c; }

.overview { padding: 80px 0; }

.prose {
    color: var(--gray-700);
    font-size: 18px;
}

.cta-banner {
    padding: 80px 0;
    color: #fff;
    background: linear-gradient(to right, var(--blue-600), var(--blue-800));
}

.cta-title { margin: 0 0 16px; font-size: 40px; font-weight: 700; }
.cta-lead { max-width: 768px; margin: 0 auto 32px; font-size: 20px; color: var(--blue-100); }
.cta-lead strong { color: #fff; }

.cta-actions {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 16px;
}

/* Footer */

.footer {
    padding: 64px 0 32px;
    color: var(--gray-400);
    background: var(--slate-900);
}

.footer-grid {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr;
    gap: 48px;
}

.footer-logo { height: 40px; width: auto; }
.footer-tagline { max-width: 360px; font-size: 14px; }
.footer-column { display: flex; flex-direction: column; gap: 8px; }
.footer-heading { margin: 0 0 8px; color: #fff; font-size: 14px; text-transform: uppercase; letter-spacing: 0.05em; }
.footer-link { font-size: 14px; }
.footer-link:hover { color: #fff; }

.footer-copyright {
    margin: 48px 0 0;
    text-align: center;
    font-size: 13px;
    color: var(--gray-500);
}

/* Responsive */

@media (max-width: 960px) {
    .hero-grid,
    .why-grid,
    .footer-grid {
        grid-template-columns: 1fr;
    }

    .header-nav { display: none; }
    .hero-title { font-size: 38px; }
    .section-title,
    .cta-title { font-size: 30px; }
}

@media (max-width: 640px) {
    .metric-grid { grid-template-columns: 1fr; }
    .dashboard-chart { flex-direction: column; }
    .service-grid,
    .highlight-grid { grid-template-columns: 1fr; }
}
"#;
