//! Global CSS styles for the portfolio page.
//!
//! Dark navy background, blue/teal accents, sans-serif body.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-deep: #0b1120;
  --bg-panel: #111a2e;
  --bg-card: rgba(17, 26, 46, 0.85);
  --border: rgba(148, 163, 184, 0.15);

  /* Accents */
  --accent: #3b82f6;
  --accent-soft: rgba(59, 130, 246, 0.2);
  --teal: #14b8a6;

  /* Text */
  --text-primary: #f1f5f9;
  --text-secondary: rgba(241, 245, 249, 0.75);
  --text-muted: rgba(241, 245, 249, 0.5);

  /* Semantic */
  --success: #22c55e;
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

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

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-deep);
  color: var(--text-primary);
  line-height: 1.6;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

/* === Loading Screen === */
.loading-screen {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--bg-deep);
}

.loading-content {
  text-align: center;
  animation: fade-in 0.8s ease both;
}

.loading-logo {
  color: var(--accent);
  display: inline-block;
  animation: spin 2s linear infinite;
}

.loading-text {
  margin-top: 1rem;
  font-size: 1.5rem;
  font-weight: 600;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes fade-in {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(10px); }
}

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  background: rgba(11, 17, 32, 0.9);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--accent);
}

.nav-menu {
  display: flex;
  gap: 0.5rem;
}

.nav-item,
.mobile-nav-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 8px;
  color: var(--text-secondary);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-item:hover,
.mobile-nav-item:hover,
.nav-item.active,
.mobile-nav-item.active {
  color: var(--text-primary);
  background: var(--accent-soft);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.mobile-menu-button {
  display: none;
  padding: 0.25rem;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  padding: 0.5rem 1.5rem 1rem;
  border-top: 1px solid var(--border);
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.submit-button {
  padding: 0.85rem 1.75rem;
  border-radius: 8px;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary,
.submit-button {
  background: var(--accent);
  color: white;
}

.btn-secondary {
  border: 1px solid var(--text-secondary);
}

.btn-primary:hover,
.btn-secondary:hover,
.submit-button:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: 0 8px 20px var(--accent-soft);
}

.submit-button:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

/* === Hero === */
.hero-section {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.hero-background {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at 30% 20%, #1e3a8a 0%, var(--bg-deep) 60%);
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, transparent 60%, var(--bg-deep) 100%);
}

.hero-container {
  position: relative;
  text-align: center;
  padding: 0 1.5rem;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 800;
  line-height: 1.2;
}

.hero-name {
  background: linear-gradient(90deg, var(--accent), var(--teal));
  -webkit-background-clip: text;
  color: transparent;
}

.hero-subtitle {
  margin-top: 1rem;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.hero-buttons {
  margin-top: 2rem;
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
}

.hero-scroll-indicator {
  margin-top: 4rem;
  color: var(--text-muted);
}

.scroll-arrow {
  animation: bounce 2s infinite;
}

/* === Sections === */
.about-section,
.experience-section,
.companies-section,
.contact-section {
  position: relative;
  padding: 6rem 1.5rem;
}

.experience-section {
  background: var(--bg-panel);
}

.section-container {
  position: relative;
  max-width: 1100px;
  margin: 0 auto;
}

.section-header {
  text-align: center;
  margin-bottom: 3rem;
}

.section-title {
  font-size: 2.5rem;
  font-weight: 700;
}

.section-subtitle {
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

.about-card,
.experience-card,
.company-card,
.contact-info-card,
.contact-form {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: 16px;
  padding: 2rem;
}

.about-card h3,
.experience-card h3 {
  margin-bottom: 1rem;
  color: var(--accent);
}

.about-text p {
  margin-bottom: 1rem;
  color: var(--text-secondary);
}

.experience-item {
  padding: 1rem 0;
  border-bottom: 1px solid var(--border);
}

.experience-item:last-child {
  border-bottom: none;
}

.experience-item p {
  color: var(--text-secondary);
}

/* === Companies === */
.companies-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem;
}

.company-card {
  transition: transform var(--transition-normal);
}

.company-card:hover {
  transform: scale(1.02);
}

.company-icon {
  color: var(--teal);
  margin-bottom: 1rem;
}

.company-subtitle {
  color: var(--accent);
  font-weight: 600;
  margin: 0.25rem 0 0.75rem;
}

.company-description {
  color: var(--text-secondary);
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 2rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 1.25rem;
}

.form-group input,
.form-group textarea {
  font: inherit;
  padding: 0.75rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: rgba(255, 255, 255, 0.04);
  color: var(--text-primary);
  resize: vertical;
}

.form-group input:focus,
.form-group textarea:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.form-notice,
.success-message,
.error-message {
  margin-top: 1rem;
  padding: 0.75rem 1rem;
  border-radius: 8px;
  animation: fade-in 0.3s ease both;
}

.form-notice {
  background: rgba(241, 245, 249, 0.06);
  color: var(--text-secondary);
}

.success-message {
  background: rgba(34, 197, 94, 0.15);
  color: var(--success);
}

.error-message {
  background: rgba(239, 68, 68, 0.15);
  color: var(--danger);
}

.contact-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 1rem;
  color: var(--text-secondary);
}

.contact-social {
  display: flex;
  gap: 1rem;
  margin-top: 1.5rem;
}

.social-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.social-link:hover {
  color: var(--accent);
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  padding: 3rem 1.5rem 1.5rem;
}

.footer-container {
  max-width: 1100px;
  margin: 0 auto;
}

.footer-content {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 2rem;
}

.footer-section ul {
  list-style: none;
  margin-top: 0.75rem;
}

.footer-section li {
  margin-bottom: 0.4rem;
  color: var(--text-secondary);
}

.footer-section button:hover {
  color: var(--accent);
}

.footer-bottom {
  margin-top: 2rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Mobile === */
@media (max-width: 768px) {
  .desktop-menu {
    display: none;
  }

  .mobile-menu-button {
    display: inline-flex;
  }

  .mobile-menu {
    display: flex;
  }

  .hero-title {
    font-size: 2.25rem;
  }

  .contact-content {
    grid-template-columns: 1fr;
  }
}
"#;
