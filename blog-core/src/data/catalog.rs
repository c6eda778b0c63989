use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

static POSTS: &[Post] = &[
    Post::new(
        "1",
        "Introduction to Next.js",
        r#"Next.js is a React framework that simplifies the development of modern web applications. It is equipped with features like Server-Side Rendering (SSR) for better performance and SEO, and Static Site Generation (SSG) for pre-rendering static pages during build time. Developers also benefit from built-in API Routes and File-Based Routing, which simplify server-side logic and navigation respectively. These features make Next.js an ideal choice for developers looking to create scalable and efficient applications.

### Why is it significant?
Server-Side Rendering improves search engine visibility by rendering content on the server, while Static Site Generation enhances page load times by pre-rendering content. API Routes allow developers to include backend functionality directly within their projects. Together, these tools empower developers to create seamless, high-performance applications.

### Example of Server-Side Rendering
In the following example, data is fetched on the server before being passed to the client:

```javascript
export async function getServerSideProps() {
  const data = await fetch('https://api.example.com/data').then((res) => res.json());
  return { props: { data } };
}

const Page = ({ data }) => <div>{data.title}</div>;
export default Page;
```

### Visual Explanation of SSR
Below is a diagram illustrating how SSR works in practice:

![Server-Side Rendering Flow](https://example.com/ssr-diagram.png)

SSR fetches data from the server, renders the page on the server-side, and sends the fully rendered HTML to the browser. This ensures faster page loads and better SEO compared to traditional client-side rendering."#,
        "/images/introduction.webp",
    ),
    Post::new(
        "2",
        "Routing in Next.js",
        r#"Next.js offers a file-based routing system that is both powerful and simple. Static routes can be easily created by adding a file in the "pages" directory. Dynamic routing, on the other hand, allows routes like `/post/:id` to be handled seamlessly with square bracket notation.

### Why is it significant?
Dynamic routing enables the creation of flexible and scalable applications. Nested routing supports organizing related pages under a common structure, and API Routes integrate backend functionality directly into your project.

### Example of Dynamic Routes
Below is an example of dynamic routing in Next.js:

```javascript
// File: pages/post/[id].js
import { useRouter } from 'next/router';

export default function Post() {
  const { id } = useRouter().query;
  return <h1>Post ID: {id}</h1>;
}
```"#,
        "/images/routing.webp",
    ),
    Post::new(
        "3",
        "Deploying Next.js Apps",
        r#"Deploying a Next.js application is straightforward with platforms like Vercel, Netlify, and AWS. For example, deploying on Vercel involves installing the CLI, initializing the deployment, and following simple prompts. Netlify requires building the application and uploading the `out` directory via their interface or CLI.

### Why is it significant?
Streamlined deployment processes reduce the time and effort needed to make applications available to users. Vercel, being the creator of Next.js, offers an optimized hosting solution, while Netlify provides flexibility for various use cases.

### Deployment Example
Commands for deploying on Vercel:
```bash
npm install -g vercel
vercel
```"#,
        "/images/Deploying.webp",
    ),
    Post::new(
        "4",
        "Optimizing Next.js Performance",
        r#"Performance optimization is crucial for any web application. Next.js provides tools like the `<Image />` component for responsive and optimized images. Dynamic imports ensure code splitting, reducing the load time by only loading required components.

### Why is it significant?
Optimized performance improves user experience by reducing page load times and ensuring efficient resource usage. Features like lazy loading and caching strategies implemented via `getStaticProps` or `getServerSideProps` further enhance speed and scalability.

### Example of Image Optimization
```javascript
import Image from 'next/image';

<Image src="/image.jpg" width={500} height={300} alt="Description" />;
```"#,
        "/images/Optimizing.webp",
    ),
    Post::new(
        "5",
        "API Routes in Next.js",
        r#"API routes in Next.js allow developers to create serverless backend functionality within the same application. These routes handle HTTP requests and are located in the "pages/api" directory.

### Why is it significant?
With API Routes, developers can build full-stack applications without managing a separate server. This reduces complexity and streamlines development workflows.

### Example of an API Route
Here is a basic example:
```javascript
// File: pages/api/hello.js
export default function handler(req, res) {
  res.status(200).json({ message: 'Hello World!' });
}
```"#,
        "/images/API routes.webp",
    ),
];

/// Ordered, read-only set of posts the site knows about.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    posts: &'a [Post],
}

impl Catalog<'static> {
    /// The posts compiled into the site.
    pub fn builtin() -> Self {
        Self { posts: POSTS }
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Catalog<'a> {
    pub fn new(posts: &'a [Post]) -> Self {
        Self { posts }
    }

    /// First post whose id equals `id` exactly.
    pub fn find(&self, id: &str) -> Option<&'a Post> {
        let post = self.posts.iter().find(|post| post.id == id);
        if post.is_none() {
            debug!(post_id = %id, "post not in catalog");
        }
        post
    }

    pub fn get(&self, id: &str) -> Result<&'a Post, DomainError> {
        self.find(id)
            .ok_or_else(|| DomainError::PostNotFound(id.to_string()))
    }

    pub fn posts(&self) -> &'a [Post] {
        self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
