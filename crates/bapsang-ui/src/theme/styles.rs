//! Global CSS for the Bapsang site.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* RICE (Backgrounds) */
  --rice: #faf7f0;
  --rice-card: #ffffff;
  --rice-border: #e8e2d4;

  /* LEAF GREEN (Brand, Primary Actions) */
  --leaf: #2f7d4f;
  --leaf-dark: #236140;
  --leaf-soft: rgba(47, 125, 79, 0.12);

  /* TANGERINE (Highlights, Pending) */
  --tangerine: #f59e0b;
  --tangerine-soft: rgba(245, 158, 11, 0.15);

  /* TEXT */
  --ink: #1f2937;
  --ink-secondary: #4b5563;
  --ink-muted: #9ca3af;

  /* SEMANTIC */
  --success: #15803d;
  --danger: #dc2626;
  --info: #2563eb;

  /* Typography */
  --font-sans: 'Pretendard', 'Noto Sans KR', 'Apple SD Gothic Neo', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--rice);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--leaf);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: rgba(250, 247, 240, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--rice-border);
}

.nav-header-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-link {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.4rem 0.9rem;
  border-radius: 9999px;
  color: var(--ink-secondary);
  font-size: var(--text-sm);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  background: var(--leaf-soft);
  color: var(--leaf-dark);
  text-decoration: none;
}

.nav-link.active {
  background: var(--leaf);
  color: #fff;
}

/* === Logo === */
.logo {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--ink);
}

.logo-mark {
  display: inline-flex;
  color: var(--leaf);
}

.logo-name {
  font-weight: 700;
  letter-spacing: -0.01em;
}

.logo--lg .logo-name { font-size: var(--text-xl); }
.logo--sm .logo-name { font-size: var(--text-sm); }

/* === Buttons === */
.btn-primary, .btn-cta, .btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  border: 1px solid transparent;
  border-radius: 0.5rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary {
  background: var(--leaf);
  color: #fff;
  padding: 0.65rem 1.4rem;
}

.btn-primary:hover:not(:disabled) {
  background: var(--leaf-dark);
  transform: translateY(-1px);
}

.btn-primary:disabled {
  opacity: 0.55;
  cursor: default;
}

.btn-cta {
  background: var(--leaf);
  color: #fff;
  padding: 0.9rem 2.2rem;
  font-size: var(--text-lg);
  border-radius: 0.75rem;
  box-shadow: 0 8px 20px var(--leaf-soft);
}

.btn-cta:hover {
  background: var(--leaf-dark);
  text-decoration: none;
  transform: translateY(-2px);
}

.btn-ghost {
  background: transparent;
  color: var(--leaf-dark);
  border-color: var(--rice-border);
  padding: 0.55rem 1.2rem;
}

.btn-ghost:hover:not(:disabled) {
  background: var(--leaf-soft);
}

/* === Hero === */
.hero {
  max-width: 1080px;
  margin: 0 auto;
  padding: 5rem 1.5rem 4rem;
  text-align: center;
}

.hero-headline {
  font-size: var(--text-3xl);
  font-weight: 800;
  letter-spacing: -0.02em;
  line-height: 1.25;
}

.hero-tagline {
  margin-top: 1rem;
  color: var(--ink-secondary);
  font-size: var(--text-lg);
}

.hero-actions {
  margin-top: 2.5rem;
}

/* === Services === */
.services {
  max-width: 1080px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
}

.service-grid {
  margin-top: 2rem;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.25rem;
}

.service-card {
  background: var(--rice-card);
  border: 1px solid var(--rice-border);
  border-radius: 1rem;
  padding: 1.75rem 1.5rem;
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.service-card:hover {
  box-shadow: 0 12px 28px rgba(31, 41, 55, 0.08);
  transform: translateY(-3px);
}

.service-icon {
  font-size: var(--text-2xl);
}

.service-title {
  margin-top: 0.75rem;
  font-size: var(--text-lg);
  font-weight: 700;
}

.service-description {
  margin-top: 0.5rem;
  color: var(--ink-secondary);
  font-size: var(--text-sm);
}

/* === Contact Form === */
.contact {
  max-width: 640px;
  margin: 0 auto;
  padding: 3rem 1.5rem 5rem;
}

.contact-form {
  margin-top: 2rem;
  background: var(--rice-card);
  border: 1px solid var(--rice-border);
  border-radius: 1rem;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.form-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-secondary);
}

.form-input {
  border: 1px solid var(--rice-border);
  border-radius: 0.5rem;
  padding: 0.65rem 0.9rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--ink);
  background: #fff;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-input:focus {
  outline: none;
  border-color: var(--leaf);
  box-shadow: 0 0 0 3px var(--leaf-soft);
}

.form-input--invalid {
  border-color: var(--danger);
}

.form-error {
  color: var(--danger);
  font-size: var(--text-xs);
}

.form-consent {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--ink-secondary);
}

.form-consent input {
  margin-top: 0.2rem;
  accent-color: var(--leaf);
}

.form-result {
  border-radius: 0.5rem;
  padding: 0.75rem 1rem;
  font-size: var(--text-sm);
}

.form-result--success {
  background: var(--leaf-soft);
  color: var(--success);
}

.form-result--failure {
  background: rgba(220, 38, 38, 0.08);
  color: var(--danger);
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--rice-border);
  background: #fffdf8;
}

.footer-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 2.5rem 1.5rem;
  display: flex;
  justify-content: space-between;
  gap: 2rem;
  flex-wrap: wrap;
}

.footer-company {
  color: var(--ink-muted);
  font-size: var(--text-xs);
  line-height: 1.8;
}

.footer-links {
  display: flex;
  gap: 1.25rem;
  font-size: var(--text-sm);
}

.footer-links a {
  color: var(--ink-secondary);
}

/* === Calc-Food Page === */
.calc-food {
  max-width: 1080px;
  margin: 0 auto;
  padding: 3rem 1.5rem 5rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.upload-panel {
  background: var(--rice-card);
  border: 2px dashed var(--rice-border);
  border-radius: 1rem;
  padding: 2.5rem;
  text-align: center;
}

.upload-title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.upload-hint {
  margin-top: 0.5rem;
  color: var(--ink-secondary);
  font-size: var(--text-sm);
}

.upload-actions {
  margin-top: 1.5rem;
}

.upload-selected {
  margin-top: 1rem;
  color: var(--leaf-dark);
  font-size: var(--text-sm);
}

/* === Invoice Table === */
.invoice-panel {
  background: var(--rice-card);
  border: 1px solid var(--rice-border);
  border-radius: 1rem;
  padding: 1.75rem;
}

.invoice-summary {
  display: flex;
  gap: 2rem;
  flex-wrap: wrap;
  padding-bottom: 1.25rem;
  border-bottom: 1px solid var(--rice-border);
}

.summary-item {
  display: flex;
  flex-direction: column;
}

.summary-label {
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

.summary-value {
  font-size: var(--text-lg);
  font-weight: 700;
}

.invoice-table {
  width: 100%;
  margin-top: 1rem;
  border-collapse: collapse;
  font-size: var(--text-sm);
}

.invoice-table th {
  text-align: left;
  color: var(--ink-muted);
  font-weight: 600;
  padding: 0.5rem 0.75rem;
  border-bottom: 1px solid var(--rice-border);
}

.invoice-table td {
  padding: 0.6rem 0.75rem;
  border-bottom: 1px solid var(--rice-border);
}

.invoice-table td.amount {
  text-align: right;
  font-variant-numeric: tabular-nums;
}

/* === Status Badges === */
.badge {
  display: inline-block;
  padding: 0.15rem 0.6rem;
  border-radius: 9999px;
  font-size: var(--text-xs);
  font-weight: 600;
}

.badge--auto {
  background: var(--leaf-soft);
  color: var(--success);
}

.badge--manual {
  background: rgba(37, 99, 235, 0.1);
  color: var(--info);
}

.badge--pending {
  background: var(--tangerine-soft);
  color: var(--tangerine);
}

.badge--unmatched {
  background: rgba(220, 38, 38, 0.08);
  color: var(--danger);
}

/* === Responsive === */
@media (max-width: 760px) {
  .hero {
    padding: 3rem 1.25rem 2.5rem;
  }

  .hero-headline {
    font-size: var(--text-2xl);
  }

  .service-grid {
    grid-template-columns: 1fr;
  }

  .footer-inner {
    flex-direction: column;
  }

  .invoice-summary {
    gap: 1.25rem;
  }
}
"#;
