// Static copy for the landing page.

pub const BRAND: &str = "WebCraftPro";

pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", section: "home" },
    NavItem { label: "Services", section: "services" },
    NavItem { label: "Portfolio", section: "portfolio" },
    NavItem { label: "Process", section: "process" },
    NavItem { label: "Testimonials", section: "testimonials" },
    NavItem { label: "Contact", section: "contact" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "🌐",
        title: "Web Design",
        description: "Custom designs that align with your brand and engage your visitors.",
    },
    Service {
        icon: "</>",
        title: "Web Development",
        description: "High-performing websites built with modern technologies like React and Next.js.",
    },
    Service {
        icon: "📱",
        title: "Responsive Design",
        description: "Websites that look and function perfectly on any device or screen size.",
    },
    Service {
        icon: "⚡",
        title: "Performance Optimization",
        description: "Fast-loading websites optimized for search engines and conversions.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce platform with secure payment processing",
        image: "/assets/projects/ecommerce.svg",
        tech: &["Next.js", "React", "Node.js", "MongoDB"],
    },
    Project {
        title: "Corporate Website",
        description: "Responsive corporate website with custom animations and content management",
        image: "/assets/projects/corporate.svg",
        tech: &["React", "MUI", "Framer Motion", "Strapi CMS"],
    },
    Project {
        title: "Real Estate Application",
        description: "Interactive property listing and search application with map integration",
        image: "/assets/projects/real-estate.svg",
        tech: &["Next.js", "TypeScript", "Tailwind CSS", "Google Maps API"],
    },
];

pub struct Phase {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PHASES: [Phase; 6] = [
    Phase {
        step: 1,
        title: "Discovery",
        description: "Understanding your business goals, target audience, and requirements.",
    },
    Phase {
        step: 2,
        title: "Planning",
        description: "Creating wireframes, sitemaps, and project roadmap.",
    },
    Phase {
        step: 3,
        title: "Design",
        description: "Crafting beautiful UI designs that align with your brand identity.",
    },
    Phase {
        step: 4,
        title: "Development",
        description: "Building your website using modern technologies and best practices.",
    },
    Phase {
        step: 5,
        title: "Testing",
        description: "Rigorous quality assurance across devices and browsers.",
    },
    Phase {
        step: 6,
        title: "Launch",
        description: "Deploying your website and providing training on content management.",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub comment: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        company: "TechStart Inc.",
        comment: "Working with this developer was a game-changer for our business. Our new website has increased conversions by 40%!",
        avatar: "/assets/avatars/sarah.svg",
    },
    Testimonial {
        name: "Michael Chen",
        company: "Innovative Solutions",
        comment: "Exceptional work quality and attention to detail. The website exceeded our expectations in both design and functionality.",
        avatar: "/assets/avatars/michael.svg",
    },
    Testimonial {
        name: "Emma Roberts",
        company: "GreenGrow Startup",
        comment: "Not only is the website beautiful, but it loads incredibly fast and works perfectly on all devices. Highly recommended!",
        avatar: "/assets/avatars/emma.svg",
    },
];

pub const CONTACT_LINES: [&str; 3] = [
    "Email: hello@webcraftpro.com",
    "Phone: (123) 456-7890",
    "Location: San Francisco, CA",
];

pub const SOCIAL_LINKS: [&str; 4] = ["GitHub", "LinkedIn", "Twitter", "Dribbble"];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn nav_sections_are_unique() {
        let sections: HashSet<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(sections.len(), NAV_ITEMS.len());
    }

    #[test]
    fn phases_are_numbered_in_order() {
        let steps: Vec<u8> = PHASES.iter().map(|phase| phase.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn every_project_lists_its_stack() {
        assert!(PROJECTS.iter().all(|project| !project.tech.is_empty()));
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn image_paths_point_at_shipped_assets() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let paths = PROJECTS
            .iter()
            .map(|project| project.image)
            .chain(TESTIMONIALS.iter().map(|testimonial| testimonial.avatar));
        for path in paths {
            let file = root.join(path.trim_start_matches('/'));
            assert!(file.is_file(), "{} is not shipped", path);
        }
    }
}
